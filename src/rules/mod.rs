//! The ordered rule table and the matcher abstraction.
//!
//! A rule pairs an anchored matcher with the [`Category`] it produces.
//! Matchers only ever test the prefix of the remaining input; they never
//! search ahead. The table's declaration order is priority data: the first
//! rule that matches wins, even when a later rule would have matched more
//! characters. Every matcher is a hand-written single-pass scanner, so
//! matching is linear in the input regardless of rule shape.

mod comment;
mod directive;
mod string;
mod trivia;
mod word;

pub use comment::{BlockComment, LineComment};
pub use directive::{AnyDirective, BareDirective, DefineDirective, IncludeDirective, NameDirective};
pub use string::QuotedString;
pub use trivia::{AnyChar, WhitespaceRun};
pub use word::{Digits, Word};

use crate::token::Category;

/// An anchored prefix matcher.
///
/// `match_prefix` returns the byte length of the lexeme matched at the
/// very start of `input`, or `None`. Implementations must be pure and
/// must never report more bytes than `input` holds or a length that
/// splits a character.
///
/// `Send + Sync` is required so a table can be shared across threads
/// without synchronization; the table is immutable after construction.
pub trait Matcher: Send + Sync {
    /// Attempts to match at the start of `input`, returning the matched
    /// byte length.
    fn match_prefix(&self, input: &str) -> Option<usize>;
}

/// One (matcher, category) pair in a table.
pub struct Rule {
    matcher: Box<dyn Matcher>,
    category: Category,
}

impl Rule {
    /// Creates a rule producing `category` whenever `matcher` matches.
    pub fn new(matcher: impl Matcher + 'static, category: Category) -> Self {
        Self {
            matcher: Box::new(matcher),
            category,
        }
    }

    /// Returns the category this rule produces.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Attempts the rule's matcher at the start of `input`.
    pub fn match_prefix(&self, input: &str) -> Option<usize> {
        self.matcher.match_prefix(input)
    }
}

/// An ordered, immutable list of rules.
///
/// Order encodes priority: [`first_match`](RuleTable::first_match) walks
/// the rules in declaration order and stops at the first hit.
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates a table from rules in priority order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The default table for C/C++-like source text.
    ///
    /// Highest priority first: the six specific directive shapes, the
    /// directive catch-all, line and block comments, words, digits,
    /// string literals, whitespace, and the single-character fallback.
    ///
    /// The word rule deliberately precedes the digit rule, so pure-digit
    /// input is classified as an identifier and the digit rule never
    /// fires from this table.
    pub fn c_preprocessor() -> Self {
        Self::new(vec![
            Rule::new(IncludeDirective, Category::PreprocessorDirective),
            Rule::new(DefineDirective, Category::PreprocessorDirective),
            Rule::new(NameDirective::new("ifdef"), Category::PreprocessorDirective),
            Rule::new(NameDirective::new("ifndef"), Category::PreprocessorDirective),
            Rule::new(BareDirective::new("else"), Category::PreprocessorDirective),
            Rule::new(BareDirective::new("endif"), Category::PreprocessorDirective),
            Rule::new(AnyDirective, Category::PreprocessorDirective),
            Rule::new(LineComment, Category::Comment),
            Rule::new(BlockComment, Category::Comment),
            Rule::new(Word, Category::Identifier),
            Rule::new(Digits, Category::Number),
            Rule::new(QuotedString, Category::StringLiteral),
            Rule::new(WhitespaceRun, Category::Whitespace),
            Rule::new(AnyChar, Category::Unknown),
        ])
    }

    /// Returns the first rule match at the start of `input`, as the
    /// matched byte length and the winning rule's category.
    ///
    /// A zero-length match is treated as a non-match: it could never
    /// advance the cursor. Only a misconfigured custom matcher can
    /// report one.
    pub fn first_match(&self, input: &str) -> Option<(usize, Category)> {
        for rule in &self.rules {
            if let Some(len) = rule.match_prefix(input) {
                if len > 0 {
                    return Some((len, rule.category));
                }
            }
        }
        None
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::c_preprocessor()
    }
}
