//! Stateless matchers and the pattern library shared by every language.
//!
//! The `regex` crate has no look-around, so a [`Matcher`] carries two
//! refinements on top of its regex:
//!
//! * a capture `group` selecting the token inside a larger match, so trailing
//!   context (the `(` after a function name) is required but not consumed;
//! * a `preceded_by` guard, an end-anchored regex checked against the text
//!   just before a candidate (`def NAME`, `= "value"`).

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use super::rule::TokenKind;
use crate::error::{HighlightError, HighlightResult};

/// Bytes of preceding text a `preceded_by` guard can see.
const LOOKBEHIND_WINDOW: usize = 256;

/// Quoted runs in `"`, `'` or `` ` ``, honoring backslash escapes.
pub const STRING: &str = r#"(?s)"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`"#;
/// `//` and `#` line comments, non-greedy `/* */` blocks.
pub const COMMENT: &str = r"//[^\n]*|(?s:/\*.*?\*/)|#[^\n]*";
pub const NUMBER: &str = r"\b0[xX][0-9a-fA-F]+\b|\b\d+\.?\d*(?:[eE][+-]?\d+)?\b";
pub const BOOLEAN: &str = r"\b(?:true|false|null|undefined|NaN|Infinity)\b";
pub const OPERATOR: &str = r"[+\-*/%=<>!&|^~?:]";
pub const PUNCTUATION: &str = r"[{}\[\];(),.:]";

/// Shared pattern for `kind`, if the library defines one.
pub fn shared(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::String => Some(STRING),
        TokenKind::Comment => Some(COMMENT),
        TokenKind::Number => Some(NUMBER),
        TokenKind::Boolean => Some(BOOLEAN),
        TokenKind::Operator => Some(OPERATOR),
        TokenKind::Punctuation => Some(PUNCTUATION),
        _ => None,
    }
}

/// Compiled matcher for the shared pattern of `kind`.
pub fn shared_matcher(kind: TokenKind) -> HighlightResult<Matcher> {
    let pattern = shared(kind).ok_or_else(|| {
        HighlightError::config(format!("No shared pattern for token kind {}", kind))
    })?;
    Matcher::new(pattern)
}

#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    group: usize,
    preceded_by: Option<Regex>,
}

impl Matcher {
    pub fn new(pattern: &str) -> HighlightResult<Self> {
        Self::build(pattern, false)
    }

    pub fn case_insensitive(pattern: &str) -> HighlightResult<Self> {
        Self::build(pattern, true)
    }

    fn build(pattern: &str, case_insensitive: bool) -> HighlightResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| HighlightError::invalid_pattern(pattern, e))?;
        Ok(Self {
            regex,
            group: 0,
            preceded_by: None,
        })
    }

    /// Emit only capture `group`; the rest of the match is context.
    pub fn with_group(mut self, group: usize) -> HighlightResult<Self> {
        if group >= self.regex.captures_len() {
            return Err(HighlightError::InvalidGroup {
                group,
                pattern: self.regex.as_str().to_string(),
            });
        }
        self.group = group;
        Ok(self)
    }

    /// Only accept candidates whose preceding text ends with `guard`.
    pub fn preceded_by(mut self, guard: &str) -> HighlightResult<Self> {
        let anchored = format!("(?:{})$", guard);
        let regex =
            Regex::new(&anchored).map_err(|e| HighlightError::invalid_pattern(guard, e))?;
        self.preceded_by = Some(regex);
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Byte range of the earliest non-empty token starting at or after `from`.
    ///
    /// The search runs over the whole of `code`, so word boundaries and guards
    /// see the text before `from`. Nothing is remembered between calls.
    pub fn find_at(&self, code: &str, from: usize) -> Option<Range<usize>> {
        self.search(code, from).map(|(_, token)| token)
    }

    /// Like [`Matcher::find_at`], also returning where the whole match began.
    /// A later search from any offset up to that anchor yields the same token.
    pub(crate) fn search(&self, code: &str, from: usize) -> Option<(usize, Range<usize>)> {
        let mut pos = from;
        while pos <= code.len() {
            let (whole, token) = if self.group == 0 {
                let m = self.regex.find_at(code, pos)?;
                (m.range(), m.range())
            } else {
                let caps = self.regex.captures_at(code, pos)?;
                let whole = caps.get(0)?.range();
                let token = caps
                    .get(self.group)
                    .map(|g| g.range())
                    .unwrap_or(whole.start..whole.start);
                (whole, token)
            };

            if !token.is_empty() && self.guard_allows(code, token.start) {
                return Some((whole.start, token));
            }
            pos = next_char_boundary(code, whole.start);
        }
        None
    }

    fn guard_allows(&self, code: &str, at: usize) -> bool {
        let Some(guard) = &self.preceded_by else {
            return true;
        };
        let mut start = at.saturating_sub(LOOKBEHIND_WINDOW);
        while !code.is_char_boundary(start) {
            start += 1;
        }
        guard.is_match(&code[start..at])
    }
}

fn next_char_boundary(code: &str, at: usize) -> usize {
    match code[at..].chars().next() {
        Some(c) => at + c.len_utf8(),
        None => at + 1,
    }
}
