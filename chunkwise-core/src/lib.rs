//! File chunking by lines, characters or approximate tokens
//!
//! This crate splits a single source file into numbered chunk files. Three
//! strategies are available:
//! - **Lines**: fixed line counts, streamed from disk
//! - **Chars**: fixed byte windows snapped back to the nearest whitespace
//! - **Tokens**: fixed windows over a whitespace/punctuation tokenization
//!
//! Consecutive chunks may share an overlap so context survives the cut, and
//! each chunk file may start with a small metadata header.
//!
//! # Example
//!
//! ```rust,no_run
//! use chunkwise_core::{ChunkConfig, Chunker, NoopObserver, Strategy};
//!
//! let config = ChunkConfig::builder("large_file.js")
//!     .output_dir("chunks")
//!     .strategy(Strategy::Lines)
//!     .chunk_size(500)
//!     .overlap(25)
//!     .build()
//!     .unwrap();
//!
//! let summary = Chunker::new(config).process(&mut NoopObserver).unwrap();
//! println!("wrote {} chunks", summary.chunks.len());
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod config;
pub mod error;
pub mod processor;
pub mod strategy;
pub mod tokenizer;
pub mod writer;

pub use chunk::{Chunk, ChunkContent, SourceRange};
pub use config::{defaults, ChunkConfig, ChunkConfigBuilder, Strategy};
pub use error::{Error, Result};
pub use processor::{ChunkSummary, Chunker};
pub use strategy::{ChunkSink, Window};
pub use tokenizer::tokenize;
pub use writer::{ChunkObserver, ChunkWriter, NoopObserver, WrittenChunk};
