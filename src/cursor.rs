//! Byte cursor over the input text.
//!
//! The cursor tracks how much of the input has been consumed and keeps
//! line/column information up to date as it advances. Rules never see the
//! cursor; they are handed the remaining suffix and the cursor advances by
//! whatever length the winning rule reports.

/// A consuming cursor over source text.
///
/// The invariant maintained throughout tokenization is that
/// `position + remaining().len() == source.len()`: the cursor only ever
/// moves forward, by whole matched lexemes.
///
/// # Example
///
/// ```
/// use cpplex::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.remaining(), "int x;");
/// cursor.advance(3);
/// assert_eq!(cursor.remaining(), " x;");
/// assert_eq!(cursor.slice_from(0), "int");
/// ```
pub struct Cursor<'src> {
    /// The full source text.
    source: &'src str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the unconsumed suffix of the input.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Returns true once the whole input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the slice from `start` up to the current position.
    ///
    /// Used to recover the lexeme after advancing past a match.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.position]
    }

    /// Advances the cursor by `bytes`, updating line/column tracking.
    ///
    /// `bytes` must land on a character boundary; match lengths reported
    /// by rules always do.
    pub fn advance(&mut self, bytes: usize) {
        let end = (self.position + bytes).min(self.source.len());
        for c in self.source[self.position..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("int x;");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.remaining(), "int x;");
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance_consumes_prefix() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance(3);
        assert_eq!(cursor.remaining(), "def");
        assert_eq!(cursor.slice_from(0), "abc");
        cursor.advance(3);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_advance_past_end_is_clamped() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\ne");
        cursor.advance(2);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 3);
        cursor.advance(1); // newline
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        cursor.advance(3); // "cd\n"
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_multibyte_column_counts_chars() {
        let mut cursor = Cursor::new("αβγ");
        cursor.advance("αβ".len());
        assert_eq!(cursor.column(), 3);
        assert_eq!(cursor.remaining(), "γ");
    }

    #[test]
    fn test_consumed_plus_remaining_is_total() {
        let source = "one two\nthree";
        let mut cursor = Cursor::new(source);
        for step in [3, 1, 3, 1, 5] {
            cursor.advance(step);
            assert_eq!(cursor.position() + cursor.remaining().len(), source.len());
        }
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }
}
