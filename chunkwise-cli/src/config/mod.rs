//! Configuration file support
//!
//! Every field is optional in the file; missing values fall back to the
//! built-in defaults. Command-line flags override both.

use crate::error::CliError;
use anyhow::{Context, Result};
use chunkwise_core::{defaults, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Strategy name: lines, chars or tokens
    #[serde(rename = "type")]
    pub chunk_type: String,

    /// Chunk size in the strategy's unit
    pub size: usize,

    /// Overlap carried into the next chunk
    pub overlap: usize,

    /// Write metadata headers
    pub metadata: bool,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_type: Strategy::default().as_str().to_string(),
            size: defaults::CHUNK_SIZE,
            overlap: defaults::OVERLAP_SIZE,
            metadata: defaults::ADD_METADATA,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving chunk files
    pub directory: PathBuf,

    /// File name prefix (None = input file stem)
    pub prefix: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(defaults::OUTPUT_DIR),
            prefix: None,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Strategy named in the file
    pub fn strategy(&self) -> Result<Strategy> {
        self.chunking
            .chunk_type
            .parse()
            .map_err(|e: chunkwise_core::Error| CliError::ConfigError(e.to_string()).into())
    }
}
