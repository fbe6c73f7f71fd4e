//! Preprocessor directive matchers.
//!
//! Each directive shape gets its own matcher; the table tries the specific
//! shapes first and [`AnyDirective`] last as the catch-all. Whitespace is
//! permitted between the `#` and the directive name, and the whitespace
//! runs separating a directive's parts may span line breaks, while the
//! free-form tail of a `#define` stops at the end of its line.

use super::comment::line_run;
use super::trivia::whitespace_run;
use super::word::word_run;
use super::Matcher;

/// Consumes `#` plus any following whitespace run.
fn hash_prefix(input: &str) -> Option<usize> {
    let rest = input.strip_prefix('#')?;
    Some(1 + whitespace_run(rest))
}

/// Consumes `keyword` at `pos`, returning the position just past it.
fn expect_keyword(input: &str, pos: usize, keyword: &str) -> Option<usize> {
    if input[pos..].starts_with(keyword) {
        Some(pos + keyword.len())
    } else {
        None
    }
}

/// Matches `#include <...>` or `#include "..."`.
///
/// The closer is the nearest `>` **or** `"` on the same line, independent
/// of which opener appeared, so `#include <stdio.h"` is accepted as one
/// directive.
pub struct IncludeDirective;

impl Matcher for IncludeDirective {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let pos = hash_prefix(input)?;
        let pos = expect_keyword(input, pos, "include")?;
        let mut pos = pos + whitespace_run(&input[pos..]);
        let opener = input[pos..].chars().next()?;
        if opener != '<' && opener != '"' {
            return None;
        }
        pos += opener.len_utf8();
        for c in input[pos..].chars() {
            match c {
                '>' | '"' => return Some(pos + c.len_utf8()),
                '\n' => return None,
                _ => pos += c.len_utf8(),
            }
        }
        None
    }
}

/// Matches `#define NAME REST-OF-LINE`.
///
/// The name and a following whitespace run are both required; a `#define`
/// without a body does not match and falls through to the catch-all,
/// which then claims only the `#define` part.
pub struct DefineDirective;

impl Matcher for DefineDirective {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let pos = hash_prefix(input)?;
        let pos = expect_keyword(input, pos, "define")?;
        let ws = whitespace_run(&input[pos..]);
        if ws == 0 {
            return None;
        }
        let pos = pos + ws;
        let name = word_run(&input[pos..]);
        if name == 0 {
            return None;
        }
        let pos = pos + name;
        let ws = whitespace_run(&input[pos..]);
        if ws == 0 {
            return None;
        }
        let pos = pos + ws;
        Some(pos + line_run(&input[pos..]))
    }
}

/// Matches `#<keyword> NAME`, the `#ifdef`/`#ifndef` shape.
pub struct NameDirective {
    keyword: &'static str,
}

impl NameDirective {
    /// Creates a matcher for `#<keyword> NAME`.
    pub const fn new(keyword: &'static str) -> Self {
        Self { keyword }
    }
}

impl Matcher for NameDirective {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let pos = hash_prefix(input)?;
        let pos = expect_keyword(input, pos, self.keyword)?;
        let ws = whitespace_run(&input[pos..]);
        if ws == 0 {
            return None;
        }
        let pos = pos + ws;
        match word_run(&input[pos..]) {
            0 => None,
            n => Some(pos + n),
        }
    }
}

/// Matches a bare `#<keyword>`, the `#else`/`#endif` shape.
///
/// Only the keyword itself is claimed: `#elseif` matches as `#else` and
/// leaves `if` in the buffer for later rules.
pub struct BareDirective {
    keyword: &'static str,
}

impl BareDirective {
    /// Creates a matcher for a bare `#<keyword>`.
    pub const fn new(keyword: &'static str) -> Self {
        Self { keyword }
    }
}

impl Matcher for BareDirective {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let pos = hash_prefix(input)?;
        expect_keyword(input, pos, self.keyword)
    }
}

/// Matches `#` followed by any word: the catch-all directive rule.
pub struct AnyDirective;

impl Matcher for AnyDirective {
    fn match_prefix(&self, input: &str) -> Option<usize> {
        let pos = hash_prefix(input)?;
        match word_run(&input[pos..]) {
            0 => None,
            n => Some(pos + n),
        }
    }
}
