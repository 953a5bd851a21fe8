//! Chunk file output

use crate::chunk::{Chunk, ChunkContent, SourceRange};
use crate::config::ChunkConfig;
use crate::error::{Error, Result};
use crate::strategy::ChunkSink;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Record of a chunk file that was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenChunk {
    /// 1-based sequence number
    pub number: usize,
    /// Full path of the chunk file
    pub path: PathBuf,
    /// File name within the output directory
    pub file_name: String,
    /// Source position of the content
    pub range: SourceRange,
    /// Content size in lines (line mode) or bytes
    pub size: usize,
}

/// Receives a notice for every chunk file written
pub trait ChunkObserver {
    /// Called once per chunk, after its file is complete
    fn chunk_written(&mut self, chunk: &WrittenChunk);
}

/// Observer that ignores all notices
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ChunkObserver for NoopObserver {
    fn chunk_written(&mut self, _chunk: &WrittenChunk) {}
}

/// Name of the file holding chunk `number`
pub fn chunk_file_name(prefix: &str, number: usize) -> String {
    format!("{prefix}_chunk_{number:03}.txt")
}

/// Writes each accepted chunk to its own numbered file
pub struct ChunkWriter<'a> {
    config: &'a ChunkConfig,
    observer: &'a mut dyn ChunkObserver,
    written: Vec<WrittenChunk>,
}

impl<'a> ChunkWriter<'a> {
    /// Create a writer for the given run configuration
    pub fn new(config: &'a ChunkConfig, observer: &'a mut dyn ChunkObserver) -> Self {
        Self {
            config,
            observer,
            written: Vec::new(),
        }
    }

    /// Consume the writer, returning the written chunks
    pub fn into_written(self) -> Vec<WrittenChunk> {
        self.written
    }

    fn write_file(&self, chunk: &Chunk) -> Result<WrittenChunk> {
        let file_name = chunk_file_name(self.config.prefix(), chunk.number);
        let path = self.config.output_dir().join(&file_name);

        let result = File::create(&path).and_then(|file| {
            let mut out = BufWriter::new(file);
            render(self.config, chunk, &mut out)?;
            out.flush()
        });
        if let Err(source) = result {
            return Err(Error::Write { path, source });
        }

        Ok(WrittenChunk {
            number: chunk.number,
            path,
            file_name,
            range: chunk.range,
            size: chunk.content.len(),
        })
    }
}

impl ChunkSink for ChunkWriter<'_> {
    fn accept(&mut self, chunk: Chunk) -> Result<()> {
        let written = self.write_file(&chunk)?;
        log::debug!("wrote {} ({})", written.path.display(), written.range);
        self.observer.chunk_written(&written);
        self.written.push(written);
        Ok(())
    }
}

/// Render a chunk file: optional metadata header, then the content
pub fn render<W: Write>(config: &ChunkConfig, chunk: &Chunk, out: &mut W) -> io::Result<()> {
    if config.add_metadata() {
        writeln!(out, "=== CHUNK {} ===", chunk.number)?;
        writeln!(out, "Source: {}", config.source().display())?;
        match (&chunk.range, &chunk.content) {
            (SourceRange::Lines { start, end }, content) => {
                writeln!(out, "Lines: {start}-{end}")?;
                writeln!(out, "Total lines in chunk: {}", content.len())?;
            }
            (range, _) => writeln!(out, "Range: {}-{}", range.start(), range.end())?,
        }
        writeln!(out, "=== CONTENT ===")?;
        writeln!(out)?;
    }

    match &chunk.content {
        ChunkContent::Lines(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        ChunkContent::Text(text) => out.write_all(text.as_bytes())?,
    }

    Ok(())
}
