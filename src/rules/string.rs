//! String literal matcher.

use super::Matcher;

/// Matches a double-quoted literal on a single line.
///
/// There is no escape-sequence awareness: the literal ends at the very
/// next `"`, so a lexeme containing `\"` terminates early at the quote.
/// An unterminated opener (no closing quote before the line break or end
/// of input) is no match at all, and the quote falls through to the
/// fallback rule.
pub struct QuotedString;

impl Matcher for QuotedString {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let rest = input.strip_prefix('"')?;
        let mut pos = 1;
        for c in rest.chars() {
            match c {
                '"' => return Some(pos + 1),
                '\n' => return None,
                _ => pos += c.len_utf8(),
            }
        }
        None
    }
}
