//! Run configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Default chunk size (lines, bytes or tokens depending on strategy)
    pub const CHUNK_SIZE: usize = 1000;

    /// Default overlap between consecutive chunks
    pub const OVERLAP_SIZE: usize = 50;

    /// Default output directory
    pub const OUTPUT_DIR: &str = "chunks";

    /// Metadata headers are written unless disabled
    pub const ADD_METADATA: bool = true;

    /// How far back (in bytes) character mode searches for whitespace
    pub const BOUNDARY_LOOKBACK: usize = 100;
}

/// Chunking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Fixed number of lines per chunk
    #[default]
    Lines,
    /// Fixed number of bytes per chunk, snapped to whitespace
    Chars,
    /// Fixed number of approximate tokens per chunk
    Tokens,
}

impl Strategy {
    /// All strategies in display order
    pub const ALL: [Strategy; 3] = [Strategy::Lines, Strategy::Chars, Strategy::Tokens];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Lines => "lines",
            Strategy::Chars => "chars",
            Strategy::Tokens => "tokens",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Lines => "fixed line count, streamed line by line",
            Strategy::Chars => "fixed character count, cut at the nearest whitespace",
            Strategy::Tokens => "fixed count of whitespace/punctuation tokens",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lines" => Ok(Strategy::Lines),
            "chars" => Ok(Strategy::Chars),
            "tokens" => Ok(Strategy::Tokens),
            _ => Err(Error::InvalidStrategy(s.to_string())),
        }
    }
}

/// Immutable configuration for one chunking run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkConfig {
    pub(crate) source: PathBuf,
    pub(crate) output_dir: PathBuf,
    pub(crate) strategy: Strategy,
    pub(crate) chunk_size: usize,
    pub(crate) overlap: usize,
    pub(crate) add_metadata: bool,
    pub(crate) prefix: String,
}

impl ChunkConfig {
    /// Create a configuration builder for the given source file
    pub fn builder(source: impl Into<PathBuf>) -> ChunkConfigBuilder {
        ChunkConfigBuilder::new(source)
    }

    /// Source file path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Directory receiving the chunk files
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Selected strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Chunk size in the strategy's unit
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Overlap in the strategy's unit
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Whether chunk files start with a metadata header
    pub fn add_metadata(&self) -> bool {
        self.add_metadata
    }

    /// Filename prefix for chunk files
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::Configuration(
                "chunk size must be greater than 0".into(),
            ));
        }

        if self.overlap >= self.chunk_size {
            return Err(Error::Configuration(format!(
                "overlap ({}) must be smaller than chunk size ({})",
                self.overlap, self.chunk_size
            )));
        }

        if self.prefix.is_empty() {
            return Err(Error::Configuration("prefix must not be empty".into()));
        }

        Ok(())
    }
}

/// Fluent builder for [`ChunkConfig`]
#[derive(Debug)]
pub struct ChunkConfigBuilder {
    source: PathBuf,
    output_dir: Option<PathBuf>,
    strategy: Option<Strategy>,
    chunk_size: Option<usize>,
    overlap: Option<usize>,
    add_metadata: Option<bool>,
    prefix: Option<String>,
}

impl ChunkConfigBuilder {
    /// Create a new builder for the given source file
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: None,
            strategy: None,
            chunk_size: None,
            overlap: None,
            add_metadata: None,
            prefix: None,
        }
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the strategy by name
    pub fn strategy_name(mut self, name: &str) -> Result<Self> {
        self.strategy = Some(name.parse()?);
        Ok(self)
    }

    /// Set the chunk size
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    /// Set the overlap size
    pub fn overlap(mut self, overlap: usize) -> Self {
        self.overlap = Some(overlap);
        self
    }

    /// Enable or disable metadata headers
    pub fn add_metadata(mut self, enabled: bool) -> Self {
        self.add_metadata = Some(enabled);
        self
    }

    /// Set the filename prefix (empty means "derive from the source")
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ChunkConfig> {
        let prefix = self
            .prefix
            .unwrap_or_else(|| default_prefix(&self.source));

        let config = ChunkConfig {
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_DIR)),
            strategy: self.strategy.unwrap_or_default(),
            chunk_size: self.chunk_size.unwrap_or(defaults::CHUNK_SIZE),
            overlap: self.overlap.unwrap_or(defaults::OVERLAP_SIZE),
            add_metadata: self.add_metadata.unwrap_or(defaults::ADD_METADATA),
            prefix,
            source: self.source,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Source file name without its extension
pub fn default_prefix(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
