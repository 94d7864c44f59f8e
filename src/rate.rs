//! Rate parameters and tick policy derivation.
//!
//! A run is paced by two knobs: the simulated transmission rate (baud) and
//! the refresh rate (fps). The baud rate bounds how much data is released
//! per second, the frame rate bounds how often the output device is
//! touched. Whichever is the binding constraint determines the per-tick
//! granularity, captured once at startup in a [`TickPolicy`].

use std::time::Duration;

/// Lowest accepted baud rate.
pub const MIN_BAUD: u32 = 1;

/// Highest accepted baud rate (512K).
pub const MAX_BAUD: u32 = 524_288;

/// Lowest accepted refresh rate.
pub const MIN_FPS: u32 = 1;

/// Highest accepted refresh rate.
pub const MAX_FPS: u32 = 240;

/// Smallest read block, in KiB.
pub const MIN_BLOCK_KIB: u64 = 1;

/// Largest read block, in KiB (4 GiB of bytes).
pub const MAX_BLOCK_KIB: u64 = 4_194_304;

/// Shortest tick interval, in milliseconds. Timer facilities cannot
/// reliably resolve intervals below this.
pub const MIN_TICK_MS: u64 = 4;

/// Clamped pacing parameters, fixed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConfig {
    /// Simulated transmission rate, in bytes per second.
    pub baud: u32,
    /// Upper bound on output refreshes per second.
    pub fps: u32,
    /// Read block size, in bytes.
    pub block_size: usize,
}

impl RateConfig {
    /// Build a config from raw user input, clamping every field into its
    /// accepted range. `block_kib` is given in KiB.
    pub fn new(baud: u32, fps: u32, block_kib: u64) -> Self {
        Self {
            baud: baud.clamp(MIN_BAUD, MAX_BAUD),
            fps: fps.clamp(MIN_FPS, MAX_FPS),
            block_size: (block_kib.clamp(MIN_BLOCK_KIB, MAX_BLOCK_KIB) << 10) as usize,
        }
    }
}

/// How a run releases bytes: so many per tick, so long between ticks.
///
/// Derived deterministically from a [`RateConfig`] and never recomputed
/// during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPolicy {
    /// Bytes released per tick, at least 1.
    pub bytes_per_tick: usize,
    /// Pause between consecutive ticks, at least [`MIN_TICK_MS`].
    pub tick_interval: Duration,
}

impl TickPolicy {
    /// Derive the tick policy for a clamped config.
    ///
    /// When the baud rate meets or exceeds the frame rate, several bytes
    /// must go out per refresh to sustain it, so ticks fire at the frame
    /// rate with `round(baud / fps)` bytes each. Below that, a single byte
    /// per tick is paced at the byte rate itself.
    pub fn for_config(config: &RateConfig) -> Self {
        let (bytes_per_tick, ticks_per_sec) = if config.baud >= config.fps {
            let step = (config.baud as f64 / config.fps as f64).round() as usize;
            (step.max(1), config.fps)
        } else {
            (1, config.baud)
        };

        let interval_ms = ((1000.0 / ticks_per_sec as f64).round() as u64).max(MIN_TICK_MS);

        // Clamping upstream makes out-of-range input a caller bug.
        debug_assert!(bytes_per_tick >= 1);
        debug_assert!(interval_ms >= MIN_TICK_MS);

        Self {
            bytes_per_tick,
            tick_interval: Duration::from_millis(interval_ms),
        }
    }
}
