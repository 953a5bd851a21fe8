//! Error handling for the CLI application

use std::fmt;

/// Setup errors detected before any chunking starts
#[derive(Debug)]
pub enum CliError {
    /// Input file missing or inaccessible
    FileNotFound(String),
    /// Configuration file could not be used
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "Input file does not exist: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}
