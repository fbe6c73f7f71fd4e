//! Comment matchers.

use super::Matcher;

/// Returns the byte length of the rest of the current line, excluding the
/// terminating newline (zero if the line ends immediately).
pub(crate) fn line_run(input: &str) -> usize {
    input.find('\n').unwrap_or(input.len())
}

/// Matches `//` followed by the rest of the line.
pub struct LineComment;

impl Matcher for LineComment {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let rest = input.strip_prefix("//")?;
        Some(2 + line_run(rest))
    }
}

/// Matches `/*` up to the nearest `*/` on the same line.
///
/// There is no line-spanning mode: a line break before the terminator
/// means no match, and the opener falls through to later rules.
pub struct BlockComment;

impl Matcher for BlockComment {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let mut rest = input.strip_prefix("/*")?;
        let mut pos = 2;
        loop {
            if rest.starts_with("*/") {
                return Some(pos + 2);
            }
            let c = rest.chars().next()?;
            if c == '\n' {
                return None;
            }
            pos += c.len_utf8();
            rest = &rest[c.len_utf8()..];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_to_end_of_line() {
        assert_eq!(LineComment.match_prefix("// hello\nint"), Some(8));
    }

    #[test]
    fn test_line_comment_at_eof() {
        assert_eq!(LineComment.match_prefix("// hello"), Some(8));
        assert_eq!(LineComment.match_prefix("//"), Some(2));
    }

    #[test]
    fn test_line_comment_requires_both_slashes() {
        assert_eq!(LineComment.match_prefix("/ x"), None);
    }

    #[test]
    fn test_block_comment_same_line() {
        assert_eq!(BlockComment.match_prefix("/* x */ y"), Some(7));
        assert_eq!(BlockComment.match_prefix("/**/"), Some(4));
    }

    #[test]
    fn test_block_comment_takes_nearest_terminator() {
        // first */ wins, the second is left in the buffer
        assert_eq!(BlockComment.match_prefix("/* a */ b */"), Some(7));
        assert_eq!(BlockComment.match_prefix("/***/"), Some(5));
    }

    #[test]
    fn test_block_comment_does_not_span_lines() {
        assert_eq!(BlockComment.match_prefix("/* a\nb */"), None);
    }

    #[test]
    fn test_block_comment_unterminated() {
        assert_eq!(BlockComment.match_prefix("/* a"), None);
    }
}
