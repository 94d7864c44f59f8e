//! Output side of a run.
//!
//! A sink takes the bytes released by each tick and pushes them out
//! immediately. Write failures are fatal to the run; retrying a broken
//! output destination is not meaningful here.

use std::io::{self, Write};

/// Push-based byte destination.
pub trait ByteSink {
    /// Write the given bytes out now.
    fn write_chunk(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// Writes straight to stdout, flushing after every tick so the pacing is
/// visible instead of pooling in the stdio buffer.
pub struct StdoutSink;

impl ByteSink for StdoutSink {
    fn write_chunk(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(bytes)?;
        out.flush()
    }
}
