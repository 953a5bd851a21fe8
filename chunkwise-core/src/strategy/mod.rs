//! Chunking strategies
//!
//! Each strategy produces [`Chunk`]s in order and hands them to a
//! [`ChunkSink`] as soon as they are complete, so a failing sink stops the
//! run without building the remaining chunks.

use crate::chunk::Chunk;
use crate::error::Result;

pub mod chars;
pub mod lines;
pub mod tokens;

pub use chars::CharChunker;
pub use lines::LineChunker;
pub use tokens::TokenChunker;

/// Receiver for chunks as a strategy produces them
pub trait ChunkSink {
    /// Accept the next chunk
    fn accept(&mut self, chunk: Chunk) -> Result<()>;
}

impl ChunkSink for Vec<Chunk> {
    fn accept(&mut self, chunk: Chunk) -> Result<()> {
        self.push(chunk);
        Ok(())
    }
}

/// Chunk size and overlap, both in the strategy's unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Target size of each chunk
    pub size: usize,
    /// Amount of the previous chunk repeated at the start of the next
    pub overlap: usize,
}

impl Window {
    /// Create a window
    pub fn new(size: usize, overlap: usize) -> Self {
        Self { size, overlap }
    }

    /// Start of the chunk following `[start, end)`
    ///
    /// Rewinds by `overlap` into the previous chunk. Falls back to `end`
    /// when the rewind would go below zero or would not move past `start`.
    pub fn next_start(&self, start: usize, end: usize) -> usize {
        if self.overlap == 0 {
            return end;
        }

        match end.checked_sub(self.overlap) {
            Some(next) if next > start => next,
            _ => end,
        }
    }
}
