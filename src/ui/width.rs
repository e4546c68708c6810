//! Display-column measurement shared by the view model, the clipper and
//! the rightmost-column command.
//!
//! Control characters such as `\t` have no defined width and occupy zero
//! columns here, so highlight positions always agree with what the clipper
//! draws.

use unicode_width::UnicodeWidthChar;

/// Columns taken by one character.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Columns taken by a string, summed per character.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}
