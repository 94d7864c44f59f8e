//! Input side of a run: bounded chunk reads from a file or stdin.
//!
//! The emitter pulls chunks through [`ChunkSource`] and only asks for the
//! next one once the current chunk is fully drained, so pending input is
//! bounded by a single block regardless of the input size.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// One bounded unit of input handed from the source to the emitter.
///
/// Chunks are immutable once produced and arrive in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteChunk {
    bytes: Vec<u8>,
}

impl ByteChunk {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteChunk {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteChunk {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

/// Pull-based chunk supplier.
///
/// `Ok(None)` marks end of stream. Callers must not request another chunk
/// until the previous one is fully consumed.
pub trait ChunkSource {
    fn next_chunk(&mut self) -> io::Result<Option<ByteChunk>>;
}

/// Adapts any [`Read`] into chunks of at most `block_size` bytes.
///
/// A short read is handed out as-is rather than refilled; only a read of
/// zero bytes ends the stream. Interrupted reads are retried.
pub struct ReadSource<R> {
    inner: R,
    block_size: usize,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R, block_size: usize) -> Self {
        Self { inner, block_size }
    }
}

impl<R: Read> ChunkSource for ReadSource<R> {
    fn next_chunk(&mut self) -> io::Result<Option<ByteChunk>> {
        let mut buf = vec![0u8; self.block_size];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    buf.truncate(n);
                    tracing::trace!(bytes = n, "read chunk");
                    return Ok(Some(ByteChunk::new(buf)));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Where the bytes come from: a file path, or standard input when the
/// positional argument is `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the input as a chunk source reading `block_size` bytes at a
    /// time.
    pub fn open(&self, block_size: usize) -> Result<Box<dyn ChunkSource>> {
        match self {
            Self::Stdin => Ok(Box::new(ReadSource::new(io::stdin(), block_size))),
            Self::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("could not open file {}", path.display()))?;
                Ok(Box::new(ReadSource::new(file, block_size)))
            }
        }
    }
}
