//! Error types for chunking runs
//!
//! Setup failures (`Configuration`, `InvalidStrategy`, `SourceNotFound`,
//! `OutputDirectory`) are raised before the first chunk is produced. `Read`,
//! `Scan` and `Write` abort a run part way through; chunk files written before
//! the failure stay on disk.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or running a chunker
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration values
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Unknown strategy name
    #[error("unsupported chunk type: {0} (expected lines, chars or tokens)")]
    InvalidStrategy(String),

    /// Source file does not exist
    #[error("input file does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Output directory could not be created
    #[error("error creating output directory {}: {source}", path.display())]
    OutputDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Source file could not be opened or read
    #[error("error reading file {}: {source}", path.display())]
    Read {
        /// Source file path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Line scan failed part way through the source
    #[error("error scanning input after line {line}: {source}")]
    Scan {
        /// Last line read successfully
        line: usize,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Chunk file could not be created or written
    #[error("error writing chunk file {}: {source}", path.display())]
    Write {
        /// Chunk file path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, Error>;
