// src/processing/classify.rs

//! Byte classification used by the word and character counts.
//!
//! The classes follow the "C" locale: only ASCII bytes are ever graphic or
//! printable, and bytes `>= 0x80` are neither.

/// Bytes counted as characters even when they are not printable:
/// tab, line feed, vertical tab, `"`, `'`, `?` and `\`.
pub const CONTROL_CHARACTERS: [u8; 7] = [9, 10, 11, 34, 39, 63, 92];

/// Returns `true` for a visible, non-whitespace byte (`0x21..=0x7E`).
#[inline]
pub fn is_graphic(byte: u8) -> bool {
    byte.is_ascii_graphic()
}

/// Returns `true` for a graphic byte or the space character (`0x20..=0x7E`).
#[inline]
pub fn is_printable(byte: u8) -> bool {
    byte == b' ' || byte.is_ascii_graphic()
}

/// Returns `true` for a member of [`CONTROL_CHARACTERS`].
#[inline]
pub fn is_control_character(byte: u8) -> bool {
    CONTROL_CHARACTERS.contains(&byte)
}

/// Returns `true` if the byte contributes to the character count.
#[inline]
pub fn is_counted_char(byte: u8) -> bool {
    is_printable(byte) || is_control_character(byte)
}
