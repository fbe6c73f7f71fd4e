//! cpplex - Rule-table lexer for C/C++-like source text
//!
//! This crate converts raw C/C++-like source text into an ordered sequence
//! of classified lexical units. It is a standalone lexical front end: given
//! a text buffer, it repeatedly applies a fixed, ordered table of anchored
//! rules at the current position, consumes the matched prefix, and emits a
//! typed lexeme, discarding whitespace.
//!
//! # Overview
//!
//! Dispatch is first-match-wins over the rule table, not longest-match: a
//! rule earlier in the table pre-empts a later rule even when the later
//! rule would have matched more characters. The table order is therefore
//! part of the observable behavior. One consequence worth knowing up
//! front: the word rule precedes the digit rule in the default table, so
//! pure-digit input like `123` comes back as an [`Category::Identifier`],
//! never as a [`Category::Number`].
//!
//! The table ends with a rule matching any single character, so with the
//! default table every input tokenizes successfully; the error path only
//! exists for custom tables with gaps.
//!
//! # Example Usage
//!
//! ```
//! use cpplex::{Category, Lexer};
//!
//! let lexer = Lexer::new();
//! let tokens = lexer.tokenize("#define MAX 100").unwrap();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].lexeme, "#define MAX 100");
//! assert_eq!(tokens[0].category, Category::PreprocessorDirective);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, category, and span definitions
//! - [`rules`] - The matcher abstraction and the ordered rule table
//! - [`lexer`] - The lexer and its matching loop
//! - [`cursor`] - Consuming cursor over the input buffer
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! The default table produces the following categories:
//!
//! - **PreprocessorDirective**: `#include <...>`/`"..."`, `#define`,
//!   `#ifdef`, `#ifndef`, `#else`, `#endif`, and any other `#word`
//! - **Comment**: `//` to end of line, or `/* ... */` on a single line
//! - **Identifier**: runs of letters, digits, and underscores
//! - **StringLiteral**: `"..."` with no escape awareness
//! - **Unknown**: any single character nothing else claimed
//!
//! Whitespace is matched but discarded, and the Number category is
//! shadowed by the identifier rule (see [`RuleTable::c_preprocessor`]).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod rules;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexResult, TokenizationError};
pub use lexer::{Lexer, Tokens};
pub use rules::{Matcher, Rule, RuleTable};
pub use token::{Category, Span, Token};
