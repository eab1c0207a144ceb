//! Character classes recognised by the scanner.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const SPACE: char = ' ';
pub const TAB: char = '\t';
pub const DOUBLE_QUOTE: char = '"';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const EQUALS: char = '=';
pub const UNDERSCORE: char = '_';

/// Whitespace that is skipped without affecting the line count.
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(ch, SPACE | TAB | CARRIAGE_RETURN)
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
