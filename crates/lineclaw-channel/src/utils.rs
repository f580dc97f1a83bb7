//! Text splitting utilities
//!
//! Long replies are broken into pieces that each fit in a single text
//! message, preferring paragraph breaks, then sentence ends, then word
//! boundaries, and only cutting mid-word as a last resort.

use lineclaw_message::simple::MAX_TEXT_LENGTH;
use lineclaw_message::{MessageError, Result, Text};

/// Boundaries tried in order; each piece keeps its trailing separator
const SEPARATORS: &[&str] = &["\n\n", ". ", " "];

/// Split `text` into trimmed chunks of at most `max` characters
pub fn split_text(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if char_len(text) <= max {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    pack(text, SEPARATORS, max, &mut chunks, &mut current);
    flush(&mut chunks, &mut current);
    chunks
}

/// Split `text` into as many text messages as it takes
pub fn text_messages(text: &str) -> Result<Vec<Text>> {
    let chunks = split_text(text, MAX_TEXT_LENGTH);
    if chunks.is_empty() {
        return Err(MessageError::Required { field: "text" });
    }
    chunks.iter().map(|chunk| Text::new(chunk)).collect()
}

fn pack(
    text: &str,
    separators: &[&str],
    max: usize,
    chunks: &mut Vec<String>,
    current: &mut String,
) {
    let Some((separator, finer)) = separators.split_first() else {
        for ch in text.chars() {
            if char_len(current) >= max {
                flush(chunks, current);
            }
            current.push(ch);
        }
        return;
    };

    for piece in text.split_inclusive(separator) {
        if char_len(current) + char_len(piece) <= max {
            current.push_str(piece);
        } else if char_len(piece) <= max {
            flush(chunks, current);
            current.push_str(piece);
        } else {
            flush(chunks, current);
            pack(piece, finer, max, chunks, current);
        }
    }
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    current.clear();
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
