//! Token and category definitions.
//!
//! A [`Token`] pairs a lexeme (a slice of the original input) with the
//! [`Category`] of the rule that matched it, plus a [`Span`] locating it
//! in the source.

use std::fmt;

/// Classification attached to each lexeme.
///
/// This is a closed set: every rule in a table maps to exactly one
/// category, and `tokenize` never produces anything outside it.
///
/// `Whitespace` is special: the default table matches whitespace runs so
/// the cursor can advance past them, but `tokenize` discards those matches
/// instead of emitting them. It only appears in output when iterating with
/// [`Lexer::iter`](crate::Lexer::iter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A `#`-introduced preprocessor line such as `#include <stdio.h>`.
    PreprocessorDirective,
    /// A `//` line comment or a single-line `/* ... */` block comment.
    Comment,
    /// A run of word characters (letters, digits, underscore).
    Identifier,
    /// A run of decimal digits.
    ///
    /// In the default table the identifier rule is tried first and also
    /// matches pure-digit runs, so this category is never produced by the
    /// default table. It is kept so custom tables can reorder the rules.
    Number,
    /// A double-quoted literal with no escape-sequence awareness.
    StringLiteral,
    /// A whitespace run, matched but discarded by `tokenize`.
    Whitespace,
    /// Any single character no earlier rule claimed.
    Unknown,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::PreprocessorDirective => "PREPROCESSOR_DIRECTIVE",
            Category::Comment => "COMMENT",
            Category::Identifier => "IDENTIFIER",
            Category::Number => "NUMBER",
            Category::StringLiteral => "STRING_LITERAL",
            Category::Whitespace => "WHITESPACE",
            Category::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A source location covering one lexeme.
///
/// Byte offsets are half-open (`start..end`); line and column are 1-based
/// and refer to the first character of the lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte of the lexeme.
    pub start: usize,
    /// Byte offset one past the last byte of the lexeme.
    pub end: usize,
    /// Line number where the lexeme starts (1-based).
    pub line: u32,
    /// Column number where the lexeme starts (1-based, in characters).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One classified lexical unit.
///
/// The lexeme borrows from the input text, so tokens are zero-copy and
/// tied to the lifetime of the source they were produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The exact substring of the input consumed by the winning rule.
    pub lexeme: &'src str,
    /// The category of the rule that matched.
    pub category: Category,
    /// Where in the source the lexeme sits.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(lexeme: &'src str, category: Category, span: Span) -> Self {
        Self {
            lexeme,
            category,
            span,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.category, self.lexeme)
    }
}
