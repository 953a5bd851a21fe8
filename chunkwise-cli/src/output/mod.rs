//! Run report formatting module

use anyhow::Result;
use chunkwise_core::{ChunkSummary, WrittenChunk};

/// Trait for run report formatters
pub trait ReportFormatter {
    /// Report a chunk file as soon as it is written
    fn chunk_written(&mut self, chunk: &WrittenChunk) -> Result<()>;

    /// Report the finished run
    fn finish(&mut self, summary: &ChunkSummary) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
