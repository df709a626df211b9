//! Character constants and classification used by the scanner.
//!
//! The language is ASCII-only outside of string literals and comments:
//! identifiers and numbers never contain non-ASCII characters.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const TAB: char = '\t';
pub const SPACE: char = ' ';
pub const DOUBLE_QUOTE: char = '"';
pub const DOT: char = '.';
pub const EQUALS: char = '=';
pub const SLASH: char = '/';
pub const UNDERSCORE: char = '_';

/// Check if a character is single-line whitespace that becomes a
/// `WhitespaceTrivia` token.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(ch, SPACE | CARRIAGE_RETURN | TAB)
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch == UNDERSCORE || ch.is_ascii_alphabetic()
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch == UNDERSCORE || ch.is_ascii_alphanumeric()
}
