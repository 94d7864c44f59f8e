//! baudcat - a buffered cat command with BAUD rate simulation.
//!
//! Relays the bytes of a file (or standard input) to the terminal at a
//! deliberately throttled rate, pacing output the way a legacy serial
//! line would.
//!
//! The crate is organized around a small core and a thin outer layer:
//!
//! - [`rate`]: clamped rate parameters and the pure tick-policy
//!   derivation (how many bytes per tick, how long between ticks)
//! - [`emitter`]: the paced emission state machine driving chunks from a
//!   source to a sink on that schedule
//! - [`source`] / [`sink`]: the pull and push sides of a run
//! - [`cli`], [`config`], [`terminal`], [`stats`]: flags, file defaults,
//!   cursor handling, and the end-of-run summary

pub mod cli;
pub mod config;
pub mod emitter;
pub mod rate;
pub mod sink;
pub mod source;
pub mod stats;
pub mod terminal;

pub use cli::Cli;
pub use config::Config;
pub use emitter::{CancelToken, EmissionReport, EmitError, Outcome, PacedEmitter, SleepTimer};
pub use rate::{RateConfig, TickPolicy};
pub use source::Input;
