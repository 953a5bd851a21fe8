//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use chunkwise_core::{ChunkSummary, WrittenChunk};
use std::io::{self, Write};

/// Plain text formatter - one line per chunk, then a closing line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn chunk_written(&mut self, chunk: &WrittenChunk) -> Result<()> {
        writeln!(
            self.writer,
            "Created chunk {}: {} ({})",
            chunk.number, chunk.file_name, chunk.range
        )?;
        Ok(())
    }

    fn finish(&mut self, _summary: &ChunkSummary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Chunking completed successfully!")?;
        self.writer.flush()?;
        Ok(())
    }
}
