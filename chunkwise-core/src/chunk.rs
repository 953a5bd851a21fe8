//! Chunk values produced by the strategies

use serde::Serialize;
use std::fmt;

/// One unit of output produced by a strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based sequence number
    pub number: usize,
    /// Chunk payload
    pub content: ChunkContent,
    /// Where the payload came from in the source
    pub range: SourceRange,
}

/// Payload of a chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkContent {
    /// Whole lines without terminators
    Lines(Vec<String>),
    /// A flat text blob
    Text(String),
}

impl ChunkContent {
    /// Size of the payload in its natural unit (lines or bytes)
    pub fn len(&self) -> usize {
        match self {
            ChunkContent::Lines(lines) => lines.len(),
            ChunkContent::Text(text) => text.len(),
        }
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Position of a chunk within the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceRange {
    /// 1-based inclusive line numbers
    Lines {
        /// First line
        start: usize,
        /// Last line
        end: usize,
    },
    /// Half-open byte offsets
    Chars {
        /// First byte
        start: usize,
        /// One past the last byte
        end: usize,
    },
    /// Half-open token indices
    Tokens {
        /// First token
        start: usize,
        /// One past the last token
        end: usize,
    },
}

impl SourceRange {
    /// Start of the range
    pub fn start(&self) -> usize {
        match *self {
            SourceRange::Lines { start, .. }
            | SourceRange::Chars { start, .. }
            | SourceRange::Tokens { start, .. } => start,
        }
    }

    /// End of the range
    pub fn end(&self) -> usize {
        match *self {
            SourceRange::Lines { end, .. }
            | SourceRange::Chars { end, .. }
            | SourceRange::Tokens { end, .. } => end,
        }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRange::Lines { start, end } => write!(f, "lines {start}-{end}"),
            SourceRange::Chars { start, end } | SourceRange::Tokens { start, end } => {
                write!(f, "range {start}-{end}")
            }
        }
    }
}
