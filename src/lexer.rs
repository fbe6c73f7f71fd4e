//! The lexer: a rule table plus the matching loop.

use crate::cursor::Cursor;
use crate::error::{LexResult, TokenizationError};
use crate::rules::RuleTable;
use crate::token::{Category, Span, Token};

/// Tokenizer for C/C++-like source text.
///
/// A lexer owns an immutable [`RuleTable`] and applies it to whole input
/// buffers. Tokenization is pure: no I/O, no shared state, and calls are
/// independent, so one lexer may be shared across threads.
///
/// # Example
///
/// ```
/// use cpplex::{Category, Lexer};
///
/// let lexer = Lexer::new();
/// let tokens = lexer.tokenize("a=1;").unwrap();
///
/// let categories: Vec<_> = tokens.iter().map(|t| t.category).collect();
/// assert_eq!(
///     categories,
///     [
///         Category::Identifier,
///         Category::Unknown,
///         Category::Identifier,
///         Category::Unknown,
///     ]
/// );
/// ```
pub struct Lexer {
    rules: RuleTable,
}

impl Lexer {
    /// Creates a lexer with the default C-preprocessor rule table.
    pub fn new() -> Self {
        Self {
            rules: RuleTable::c_preprocessor(),
        }
    }

    /// Creates a lexer with an explicit rule table.
    ///
    /// This is the configuration point for custom tables. Tables without
    /// a fallback rule can leave input unmatched, which surfaces as
    /// [`TokenizationError::UnmatchedInput`].
    pub fn with_rules(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Returns the lexer's rule table.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Tokenizes `source` into its ordered token sequence.
    ///
    /// Whitespace lexemes are matched (the cursor must advance past them)
    /// but never appear in the result. Empty input yields an empty
    /// sequence.
    ///
    /// # Errors
    ///
    /// [`TokenizationError::UnmatchedInput`] if no rule matches at some
    /// position. The default table's fallback rule makes this unreachable;
    /// it exists for custom tables with gaps.
    pub fn tokenize<'src>(&self, source: &'src str) -> LexResult<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        for token in self.iter(source) {
            let token = token?;
            if token.category != Category::Whitespace {
                tokens.push(token);
            }
        }
        Ok(tokens)
    }

    /// Returns an iterator over every match in `source`, whitespace
    /// included.
    ///
    /// Each item covers exactly the bytes the winning rule consumed, so
    /// concatenating the lexemes of a fully-drained iterator reconstructs
    /// the input byte for byte.
    pub fn iter<'lex, 'src>(&'lex self, source: &'src str) -> Tokens<'lex, 'src> {
        Tokens {
            rules: &self.rules,
            cursor: Cursor::new(source),
            failed: false,
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over every rule match in an input, whitespace included.
///
/// Yields `Err` once and then stops if the table fails to match; with the
/// default table this never happens.
pub struct Tokens<'lex, 'src> {
    rules: &'lex RuleTable,
    cursor: Cursor<'src>,
    failed: bool,
}

impl<'lex, 'src> Iterator for Tokens<'lex, 'src> {
    type Item = LexResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }

        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        match self.rules.first_match(self.cursor.remaining()) {
            Some((len, category)) => {
                self.cursor.advance(len);
                let span = Span::new(start, self.cursor.position(), line, column);
                Some(Ok(Token::new(self.cursor.slice_from(start), category, span)))
            },
            None => {
                self.failed = true;
                Some(Err(TokenizationError::UnmatchedInput {
                    offset: start,
                    remaining: self.cursor.remaining().to_string(),
                }))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AnyChar, Rule, Word};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new().tokenize(source).unwrap()
    }

    fn pairs<'src>(tokens: &[Token<'src>]) -> Vec<(&'src str, Category)> {
        tokens.iter().map(|t| (t.lexeme, t.category)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(lex_all("  \t \n ").is_empty());
    }

    #[test]
    fn test_digits_classified_as_identifier() {
        // words are tried before digits, so the digit rule never wins
        assert_eq!(pairs(&lex_all("123")), [("123", Category::Identifier)]);
        assert_eq!(pairs(&lex_all("123abc")), [("123abc", Category::Identifier)]);
    }

    #[test]
    fn test_define_is_one_token() {
        assert_eq!(
            pairs(&lex_all("#define MAX 100")),
            [("#define MAX 100", Category::PreprocessorDirective)]
        );
    }

    #[test]
    fn test_line_comment_drops_trailing_newline() {
        assert_eq!(pairs(&lex_all("// hello\n")), [("// hello", Category::Comment)]);
    }

    #[test]
    fn test_block_comment_never_spans_lines() {
        assert_eq!(
            pairs(&lex_all("/* a\nb */")),
            [
                ("/", Category::Unknown),
                ("*", Category::Unknown),
                ("a", Category::Identifier),
                ("b", Category::Identifier),
                ("*", Category::Unknown),
                ("/", Category::Unknown),
            ]
        );
    }

    #[test]
    fn test_assignment_statement() {
        assert_eq!(
            pairs(&lex_all("a=1;")),
            [
                ("a", Category::Identifier),
                ("=", Category::Unknown),
                ("1", Category::Identifier),
                (";", Category::Unknown),
            ]
        );
    }

    #[test]
    fn test_determinism() {
        let source = "#include <stdio.h>\nint main() { return 0; } // done";
        let lexer = Lexer::new();
        assert_eq!(
            lexer.tokenize(source).unwrap(),
            lexer.tokenize(source).unwrap()
        );
    }

    #[test]
    fn test_whitespace_never_emitted() {
        for token in lex_all(" a \n b\t// c\n d ") {
            assert_ne!(token.category, Category::Whitespace);
        }
    }

    #[test]
    fn test_iter_includes_whitespace() {
        let lexer = Lexer::new();
        let all: Vec<_> = lexer.iter("a b").map(Result::unwrap).collect();
        assert_eq!(
            pairs(&all),
            [
                ("a", Category::Identifier),
                (" ", Category::Whitespace),
                ("b", Category::Identifier),
            ]
        );
    }

    #[test]
    fn test_spans_cover_consumed_prefixes() {
        let tokens = lex_all("ab =\ncd");
        assert_eq!(tokens[0].span, Span::new(0, 2, 1, 1));
        assert_eq!(tokens[1].span, Span::new(3, 4, 1, 4));
        assert_eq!(tokens[2].span, Span::new(5, 7, 2, 1));
    }

    #[test]
    fn test_empty_table_reports_unmatched_input() {
        let lexer = Lexer::with_rules(RuleTable::new(Vec::new()));
        let err = lexer.tokenize("int x;").unwrap_err();
        assert_eq!(
            err,
            TokenizationError::UnmatchedInput {
                offset: 0,
                remaining: "int x;".to_string(),
            }
        );
    }

    #[test]
    fn test_gap_table_reports_offset_and_remaining() {
        // words only: the "=" cannot be matched
        let lexer = Lexer::with_rules(RuleTable::new(vec![Rule::new(
            Word,
            Category::Identifier,
        )]));
        let err = lexer.tokenize("ab=cd").unwrap_err();
        assert_eq!(
            err,
            TokenizationError::UnmatchedInput {
                offset: 2,
                remaining: "=cd".to_string(),
            }
        );
    }

    #[test]
    fn test_iter_stops_after_error() {
        let lexer = Lexer::with_rules(RuleTable::new(vec![Rule::new(
            Word,
            Category::Identifier,
        )]));
        let mut iter = lexer.iter("ab=cd");
        assert!(matches!(iter.next(), Some(Ok(_))));
        assert!(matches!(iter.next(), Some(Err(_))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_fallback_only_table_tokenizes_anything() {
        let lexer = Lexer::with_rules(RuleTable::new(vec![Rule::new(
            AnyChar,
            Category::Unknown,
        )]));
        let tokens = lexer.tokenize("a\nb").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.category == Category::Unknown));
    }

    // ------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------

    #[test]
    fn test_property_lossless_coverage() {
        use proptest::prelude::*;

        proptest!(|(input: String)| {
            let lexer = Lexer::new();
            let mut rebuilt = String::new();
            for token in lexer.iter(&input) {
                rebuilt.push_str(token.unwrap().lexeme);
            }
            prop_assert_eq!(rebuilt, input);
        });
    }

    #[test]
    fn test_property_deterministic() {
        use proptest::prelude::*;

        proptest!(|(input: String)| {
            let lexer = Lexer::new();
            prop_assert_eq!(
                lexer.tokenize(&input).unwrap(),
                lexer.tokenize(&input).unwrap()
            );
        });
    }

    #[test]
    fn test_property_default_table_never_fails() {
        use proptest::prelude::*;

        proptest!(|(input: String)| {
            prop_assert!(Lexer::new().tokenize(&input).is_ok());
        });
    }

    #[test]
    fn test_property_no_whitespace_in_output() {
        use proptest::prelude::*;

        proptest!(|(input: String)| {
            for token in Lexer::new().tokenize(&input).unwrap() {
                prop_assert_ne!(token.category, Category::Whitespace);
            }
        });
    }
}
