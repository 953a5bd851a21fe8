//! Character-count chunking with whitespace snapping

use super::{ChunkSink, Window};
use crate::chunk::{Chunk, ChunkContent, SourceRange};
use crate::config::defaults;
use crate::error::Result;

/// Splits text into byte windows that prefer to end before whitespace
///
/// Sizes and reported ranges are byte offsets. Cuts are always moved onto
/// UTF-8 character boundaries.
#[derive(Debug, Clone, Copy)]
pub struct CharChunker {
    window: Window,
    lookback: usize,
}

impl CharChunker {
    /// Create a character chunker with the default whitespace lookback
    pub fn new(window: Window) -> Self {
        Self {
            window,
            lookback: defaults::BOUNDARY_LOOKBACK,
        }
    }

    /// Override how many bytes are searched backwards for whitespace
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Split `text` into chunks, returning how many were emitted
    pub fn split(&self, text: &str, sink: &mut dyn ChunkSink) -> Result<usize> {
        let len = text.len();
        let mut start = 0;
        let mut number = 1;

        while start < len {
            let mut end = floor_char_boundary(text, (start + self.window.size).min(len));
            if end <= start {
                // Window narrower than the character at `start`.
                end = ceil_char_boundary(text, start + 1);
            }

            let snapped = match self.whitespace_before(text, start, end) {
                Some(cut) => {
                    end = cut;
                    true
                }
                None => false,
            };

            let range = SourceRange::Chars { start, end };
            log::trace!("char chunk {number}: {range}");
            sink.accept(Chunk {
                number,
                content: ChunkContent::Text(text[start..end].to_string()),
                range,
            })?;
            number += 1;

            if end >= len {
                break;
            }

            start = if self.window.overlap > 0 {
                ceil_char_boundary(text, self.window.next_start(start, end))
            } else if snapped {
                // The whitespace we cut at separates the chunks.
                end + 1
            } else {
                end
            };
        }

        Ok(number - 1)
    }

    /// Last whitespace byte in `(max(start, end - lookback), end]`
    fn whitespace_before(&self, text: &str, start: usize, end: usize) -> Option<usize> {
        if end >= text.len() {
            return None;
        }

        let bytes = text.as_bytes();
        let low = start.max(end.saturating_sub(self.lookback));
        (low + 1..=end)
            .rev()
            .find(|&i| matches!(bytes[i], b' ' | b'\n' | b'\t'))
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index.min(text.len())
}
