//! The rate-paced transmission core.
//!
//! [`PacedEmitter`] drains input chunks to a sink at the cadence fixed by
//! a [`TickPolicy`]: wait one tick interval, write `bytes_per_tick` bytes
//! (or the chunk tail if shorter), repeat. Chunks are drained one at a
//! time and the next one is pulled only when the current one is
//! exhausted, so memory stays bounded by a single read block.
//!
//! The run is an explicit state machine:
//!
//! ```text
//! Idle --chunk arrives--> Draining --chunk exhausted--> Idle
//! Idle --end of stream--> Finished
//!    * --cancel requested--> Cancelled
//! ```
//!
//! Timing is injected through [`TickTimer`], so tests drive the machine
//! with a fake timer and synthetic chunk sequences instead of wall-clock
//! sleeps and real I/O.

pub mod cancel;
pub mod error;
pub mod timer;

pub use cancel::CancelToken;
pub use error::EmitError;
pub use timer::{SleepTimer, TickTimer};

use std::time::{Duration, Instant};

use crate::rate::TickPolicy;
use crate::sink::ByteSink;
use crate::source::{ByteChunk, ChunkSource};

/// Lifecycle of an emission run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    /// No chunk in progress; ready to pull the next one.
    Idle,
    /// A chunk is being drained tick by tick.
    Draining,
    /// Source exhausted and the last chunk fully drained.
    Finished,
    /// Stop requested from outside; no further ticks are scheduled.
    Cancelled,
}

/// How a run ended. Cancellation is a normal ending, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The whole input was emitted.
    Completed,
    /// A cancellation request stopped the run early.
    Interrupted,
}

/// Summary of a finished run, consumed by the stats layer.
#[derive(Debug, Clone, Copy)]
pub struct EmissionReport {
    pub outcome: Outcome,
    /// Total bytes written to the sink.
    pub bytes_emitted: u64,
    /// When emission started.
    pub started_at: Instant,
    /// Wall time from the first pull to the last write.
    pub elapsed: Duration,
}

/// Drains chunks to a sink at a fixed tick cadence.
///
/// One emitter instance drives one run; bytes reach the sink in source
/// order, with only their timing altered.
pub struct PacedEmitter<T = SleepTimer> {
    policy: TickPolicy,
    timer: T,
    cancel: CancelToken,
    state: EmitterState,
    bytes_emitted: u64,
}

impl<T: TickTimer> PacedEmitter<T> {
    pub fn new(policy: TickPolicy, timer: T, cancel: CancelToken) -> Self {
        Self {
            policy,
            timer,
            cancel,
            state: EmitterState::Idle,
            bytes_emitted: 0,
        }
    }

    pub fn state(&self) -> EmitterState {
        self.state
    }

    pub fn bytes_emitted(&self) -> u64 {
        self.bytes_emitted
    }

    /// Run the schedule until the source is exhausted, a cancellation
    /// request lands, or a read/write fails.
    ///
    /// A zero-length input goes straight to `Finished` with no ticks
    /// scheduled. On failure, bytes already emitted stay emitted; the
    /// error is surfaced without retry and nothing further is scheduled.
    pub fn run(
        &mut self,
        source: &mut dyn ChunkSource,
        sink: &mut dyn ByteSink,
    ) -> Result<EmissionReport, EmitError> {
        let started_at = Instant::now();
        tracing::debug!(
            bytes_per_tick = self.policy.bytes_per_tick,
            interval_ms = self.policy.tick_interval.as_millis() as u64,
            "emission started"
        );

        loop {
            if self.cancel.is_cancelled() {
                self.state = EmitterState::Cancelled;
                break;
            }

            let chunk = match source.next_chunk() {
                Ok(Some(chunk)) => chunk,
                Ok(None) => {
                    self.state = EmitterState::Finished;
                    break;
                }
                Err(e) => return Err(EmitError::SourceRead(e)),
            };

            self.state = EmitterState::Draining;
            if !self.drain(&chunk, sink)? {
                self.state = EmitterState::Cancelled;
                break;
            }
            self.state = EmitterState::Idle;
        }

        let report = EmissionReport {
            outcome: match self.state {
                EmitterState::Cancelled => Outcome::Interrupted,
                _ => Outcome::Completed,
            },
            bytes_emitted: self.bytes_emitted,
            started_at,
            elapsed: started_at.elapsed(),
        };
        tracing::debug!(
            bytes = report.bytes_emitted,
            interrupted = matches!(report.outcome, Outcome::Interrupted),
            "emission finished"
        );
        Ok(report)
    }

    /// Drain one chunk tick by tick.
    ///
    /// Returns `false` when a cancellation request stopped the drain
    /// mid-chunk. The cursor only moves past bytes the sink accepted.
    fn drain(&mut self, chunk: &ByteChunk, sink: &mut dyn ByteSink) -> Result<bool, EmitError> {
        let bytes = chunk.as_bytes();
        let mut cursor = 0;

        while cursor < bytes.len() {
            if self.cancel.is_cancelled() {
                return Ok(false);
            }
            self.timer.wait(self.policy.tick_interval);

            let end = bytes.len().min(cursor + self.policy.bytes_per_tick);
            sink.write_chunk(&bytes[cursor..end])
                .map_err(EmitError::SinkWrite)?;
            self.bytes_emitted += (end - cursor) as u64;
            cursor = end;
        }

        Ok(true)
    }
}
