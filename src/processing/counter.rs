// src/processing/counter.rs

//! Streaming byte scanners.
//!
//! All scanners accept input in arbitrary chunks, so a file can be fed
//! through a fixed-size read buffer without affecting the result.

use super::classify::{is_counted_char, is_graphic};
use crate::core_types::FileCounts;

/// Word boundary automaton with two states, inside or outside a graphic run.
///
/// A word is counted when a graphic run ends, either at a non-graphic byte or
/// at the end of the stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordScanner {
    in_word: bool,
    words: u64,
}

impl WordScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the automaton over `chunk`.
    pub fn update(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            let graphic = is_graphic(byte);
            if self.in_word && !graphic {
                self.words += 1;
            }
            self.in_word = graphic;
        }
    }

    /// Closes a run still open at end of stream and returns the word count.
    pub fn finish(self) -> u64 {
        self.words + u64::from(self.in_word)
    }
}

/// Number of `\n` bytes in `chunk`.
#[inline]
pub fn count_newlines(chunk: &[u8]) -> u64 {
    chunk.iter().filter(|&&b| b == b'\n').count() as u64
}

/// Number of bytes in `chunk` that count as characters.
#[inline]
pub fn count_chars_in(chunk: &[u8]) -> u64 {
    chunk.iter().filter(|&&b| is_counted_char(b)).count() as u64
}

/// Single-pass scanner producing lines, words, and characters together.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteTally {
    newlines: u64,
    chars: u64,
    scanned: u64,
    words: WordScanner,
}

impl ByteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            if byte == b'\n' {
                self.newlines += 1;
            }
            if is_counted_char(byte) {
                self.chars += 1;
            }
        }
        self.words.update(chunk);
        self.scanned += chunk.len() as u64;
    }

    /// Returns the counts seen so far.
    ///
    /// `bytes` holds the number of bytes scanned. File-level callers replace
    /// it with the size reported by filesystem metadata.
    pub fn finish(self) -> FileCounts {
        FileCounts {
            lines: 1 + self.newlines,
            words: self.words.finish(),
            chars: self.chars,
            bytes: self.scanned,
        }
    }
}

/// Calculates all four counts for an in-memory buffer.
///
/// # Examples
///
/// ```
/// use bytewc::processing::calculate_counts;
///
/// let counts = calculate_counts(b"abc def\n");
/// assert_eq!(counts.lines, 2);
/// assert_eq!(counts.words, 2);
/// assert_eq!(counts.chars, 8);
/// assert_eq!(counts.bytes, 8);
/// ```
pub fn calculate_counts(content: &[u8]) -> FileCounts {
    let mut tally = ByteTally::new();
    tally.update(content);
    tally.finish()
}
