//! Word and digit matchers.
//!
//! The word matcher also matches pure-digit runs, and it sits earlier in
//! the default table than the digit matcher, so input like `123` is
//! classified as an identifier there. The digit matcher stays available
//! for tables that order it first.

use super::Matcher;

/// Returns true for word characters: letters, digits, and underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the byte length of the word-character run at the start of `input`.
pub(crate) fn word_run(input: &str) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(input.len(), |(i, _)| i)
}

/// Matches one or more word characters.
pub struct Word;

impl Matcher for Word {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        match word_run(input) {
            0 => None,
            n => Some(n),
        }
    }
}

/// Matches one or more ASCII decimal digits.
pub struct Digits;

impl Matcher for Digits {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let n = input
            .as_bytes()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        match n {
            0 => None,
            n => Some(n),
        }
    }
}
