//! Line-count chunking

use super::{ChunkSink, Window};
use crate::chunk::{Chunk, ChunkContent, SourceRange};
use crate::error::{Error, Result};
use std::io::BufRead;

/// Streams a source line by line into fixed-size line chunks
#[derive(Debug, Clone, Copy)]
pub struct LineChunker {
    window: Window,
}

impl LineChunker {
    /// Create a line chunker
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Split `reader` into chunks, returning how many were emitted
    ///
    /// A chunk is flushed as soon as it holds `window.size` lines, counting
    /// the lines carried over from the previous chunk. The carried lines are
    /// only inserted once a new line arrives, so a trailing carry is never
    /// emitted on its own.
    pub fn split<R: BufRead>(&self, mut reader: R, sink: &mut dyn ChunkSink) -> Result<usize> {
        let mut buffer: Vec<String> = Vec::new();
        let mut carry: Vec<String> = Vec::new();
        let mut raw = Vec::new();
        let mut line_number = 0;
        let mut number = 1;

        loop {
            raw.clear();
            let read = reader
                .read_until(b'\n', &mut raw)
                .map_err(|source| Error::Scan {
                    line: line_number,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            if buffer.is_empty() && !carry.is_empty() {
                buffer.append(&mut carry);
            }
            buffer.push(decode_line(&raw));

            if buffer.len() >= self.window.size {
                let overlap = self.window.overlap;
                if overlap > 0 && buffer.len() > overlap {
                    carry = buffer[buffer.len() - overlap..].to_vec();
                }

                emit(sink, number, std::mem::take(&mut buffer), line_number)?;
                number += 1;
            }
        }

        if !buffer.is_empty() {
            emit(sink, number, buffer, line_number)?;
            number += 1;
        }

        Ok(number - 1)
    }
}

fn emit(sink: &mut dyn ChunkSink, number: usize, lines: Vec<String>, last: usize) -> Result<()> {
    let range = SourceRange::Lines {
        start: last + 1 - lines.len(),
        end: last,
    };
    log::trace!("line chunk {number}: {range}");
    sink.accept(Chunk {
        number,
        content: ChunkContent::Lines(lines),
        range,
    })
}

/// Strip the line terminator (`\n` or `\r\n`) and decode lossily
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
