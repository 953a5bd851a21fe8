//! Token-count chunking

use super::{ChunkSink, Window};
use crate::chunk::{Chunk, ChunkContent, SourceRange};
use crate::error::Result;
use crate::tokenizer::tokenize;

/// Splits text into fixed windows of approximate tokens
#[derive(Debug, Clone, Copy)]
pub struct TokenChunker {
    window: Window,
}

impl TokenChunker {
    /// Create a token chunker
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Tokenize `text` and split the tokens, returning how many chunks were emitted
    pub fn split(&self, text: &str, sink: &mut dyn ChunkSink) -> Result<usize> {
        let tokens = tokenize(text);
        log::debug!("tokenized input into {} tokens", tokens.len());
        self.split_tokens(&tokens, sink)
    }

    /// Split an already tokenized sequence
    ///
    /// Chunk content is the window's tokens joined by single spaces.
    pub fn split_tokens(&self, tokens: &[String], sink: &mut dyn ChunkSink) -> Result<usize> {
        let mut start = 0;
        let mut number = 1;

        while start < tokens.len() {
            let end = (start + self.window.size).min(tokens.len());

            let range = SourceRange::Tokens { start, end };
            log::trace!("token chunk {number}: {range}");
            sink.accept(Chunk {
                number,
                content: ChunkContent::Text(tokens[start..end].join(" ")),
                range,
            })?;
            number += 1;

            if end == tokens.len() {
                break;
            }
            start = self.window.next_start(start, end);
        }

        Ok(number - 1)
    }
}
