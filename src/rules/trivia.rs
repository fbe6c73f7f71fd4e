//! Whitespace and fallback matchers.
//!
//! These two rules close the default table: whitespace runs are matched so
//! the cursor can move past them (the lexer discards the lexeme), and the
//! single-character fallback guarantees every remaining input makes
//! progress, which is what keeps the unmatched-input error unreachable
//! with the default table.

use super::Matcher;

/// Returns the byte length of the whitespace run at the start of `input`.
pub(crate) fn whitespace_run(input: &str) -> usize {
    input.len() - input.trim_start().len()
}

/// Matches one or more whitespace characters.
pub struct WhitespaceRun;

impl Matcher for WhitespaceRun {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        match whitespace_run(input) {
            0 => None,
            n => Some(n),
        }
    }
}

/// Matches any single character. The universal fallback.
pub struct AnyChar;

impl Matcher for AnyChar {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        input.chars().next().map(char::len_utf8)
    }
}
