//! Chunkwise CLI library
//!
//! This library provides the command-line interface for splitting large
//! files into line, character or token chunks.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::CliError;
