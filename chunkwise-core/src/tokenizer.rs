//! Whitespace/punctuation tokenizer
//!
//! This is a coarse approximation used to size token chunks. It does not
//! model any language-model vocabulary.

/// Punctuation emitted as standalone tokens
pub const PUNCTUATION: [char; 12] = ['.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}'];

/// Characters that separate tokens and are dropped
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Split text into tokens
///
/// Runs of non-separator characters become one token. Each punctuation
/// character in [`PUNCTUATION`] ends the current run and is emitted on its
/// own.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_separator(c) {
            flush(&mut current, &mut tokens);
        } else if PUNCTUATION.contains(&c) {
            flush(&mut current, &mut tokens);
            tokens.push(c.to_string());
        } else {
            current.push(c);
        }
    }

    flush(&mut current, &mut tokens);
    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
