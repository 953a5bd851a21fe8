//! Run orchestration: directory setup, strategy dispatch and output

use crate::chunk::Chunk;
use crate::config::{ChunkConfig, Strategy};
use crate::error::{Error, Result};
use crate::strategy::{CharChunker, ChunkSink, LineChunker, TokenChunker, Window};
use crate::writer::{ChunkObserver, ChunkWriter, WrittenChunk};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Outcome of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct ChunkSummary {
    /// Source file
    pub source: PathBuf,
    /// Directory holding the chunk files
    pub output_dir: PathBuf,
    /// Strategy used
    pub strategy: Strategy,
    /// Configured chunk size
    pub chunk_size: usize,
    /// Configured overlap
    pub overlap: usize,
    /// Every chunk file written, in order
    pub chunks: Vec<WrittenChunk>,
}

/// Splits one source file according to a [`ChunkConfig`]
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkConfig,
}

impl Chunker {
    /// Create a chunker
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Split the source and write every chunk to the output directory
    ///
    /// The output directory is created if needed. Chunk files already written
    /// when an error occurs are left in place.
    pub fn process(&self, observer: &mut dyn ChunkObserver) -> Result<ChunkSummary> {
        self.check_source()?;
        create_output_dir(self.config.output_dir())?;

        log::info!(
            "chunking {} by {} (size {}, overlap {})",
            self.config.source().display(),
            self.config.strategy(),
            self.config.chunk_size(),
            self.config.overlap()
        );

        let mut writer = ChunkWriter::new(&self.config, observer);
        let count = self.run(&mut writer)?;
        log::info!("wrote {count} chunks to {}", self.config.output_dir().display());

        Ok(ChunkSummary {
            source: self.config.source().to_path_buf(),
            output_dir: self.config.output_dir().to_path_buf(),
            strategy: self.config.strategy(),
            chunk_size: self.config.chunk_size(),
            overlap: self.config.overlap(),
            chunks: writer.into_written(),
        })
    }

    /// Split the source into chunks in memory without writing any files
    pub fn split_source(&self) -> Result<Vec<Chunk>> {
        self.check_source()?;
        let mut chunks = Vec::new();
        self.run(&mut chunks)?;
        Ok(chunks)
    }

    /// Dispatch to the configured strategy
    fn run(&self, sink: &mut dyn ChunkSink) -> Result<usize> {
        let window = Window::new(self.config.chunk_size(), self.config.overlap());
        let source = self.config.source();
        log::debug!("dispatching to {} strategy", self.config.strategy());

        match self.config.strategy() {
            Strategy::Lines => {
                let file = File::open(source).map_err(|e| read_error(source, e))?;
                LineChunker::new(window).split(BufReader::new(file), sink)
            }
            Strategy::Chars => {
                let text = read_utf8(source)?;
                CharChunker::new(window).split(&text, sink)
            }
            Strategy::Tokens => {
                let text = read_text(source)?;
                TokenChunker::new(window).split(&text, sink)
            }
        }
    }

    fn check_source(&self) -> Result<()> {
        let source = self.config.source();
        if !source.exists() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }
        if !source.is_file() {
            return Err(read_error(
                source,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        Ok(())
    }
}

/// Read the whole source, replacing invalid UTF-8
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Read the whole source, rejecting invalid UTF-8
///
/// Char ranges are byte offsets into the file, so the text must be the
/// file's bytes unchanged.
fn read_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    String::from_utf8(bytes).map_err(|err| {
        read_error(
            path,
            io::Error::new(io::ErrorKind::InvalidData, err.utf8_error()),
        )
    })
}

fn read_error(path: &Path, source: io::Error) -> Error {
    Error::Read {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(unix)]
fn create_output_dir(path: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o755)
        .create(path)
        .map_err(|source| Error::OutputDirectory {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(not(unix))]
fn create_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::OutputDirectory {
        path: path.to_path_buf(),
        source,
    })
}
