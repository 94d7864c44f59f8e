//! The wait primitive between ticks.
//!
//! The emitter never touches the wall clock directly; it asks a
//! [`TickTimer`] to wait out each interval. Production uses
//! [`SleepTimer`], tests inject a recording fake so the state machine can
//! be exercised without real timers.

use std::thread;
use std::time::Duration;

/// Blocks the current thread for one tick interval.
pub trait TickTimer {
    fn wait(&mut self, interval: Duration);
}

/// Real timer backed by [`thread::sleep`].
pub struct SleepTimer;

impl TickTimer for SleepTimer {
    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}
