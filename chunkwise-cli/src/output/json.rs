//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use chunkwise_core::{ChunkSummary, WrittenChunk};
use std::io::{self, Write};

/// JSON formatter - prints the whole run summary once the run is done
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn chunk_written(&mut self, _chunk: &WrittenChunk) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &ChunkSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, summary)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
