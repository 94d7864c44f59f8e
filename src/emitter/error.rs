//! Emission failures.

/// Errors that end a paced run early.
///
/// Cancellation is not listed here: stopping on request is a normal
/// terminal transition, reported through the run outcome instead.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The output destination refused a write. Fatal, never retried.
    #[error("failed to write to output: {0}")]
    SinkWrite(std::io::Error),

    /// The input could not be read. No further ticks are scheduled.
    #[error("failed to read input: {0}")]
    SourceRead(std::io::Error),
}
