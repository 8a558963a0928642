use std::ops::Range;

use super::pattern::Matcher;

/// Semantic label attached to a token. The string form doubles as the CSS
/// class emitted by the formatter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenKind {
    Text,
    Keyword,
    String,
    Comment,
    Number,
    Boolean,
    Operator,
    Punctuation,
    Function,
    ClassName,
    Builtin,
    Variable,
    Tag,
    AttrName,
    AttrValue,
    Selector,
    Property,
    Value,
    Important,
}

impl TokenKind {
    pub fn is_text(&self) -> bool {
        matches!(self, TokenKind::Text)
    }
}

/// A matcher paired with the kind it produces.
#[derive(Debug, Clone)]
pub struct TokenRule {
    pub kind: TokenKind,
    pub matcher: Matcher,
}

impl TokenRule {
    pub fn new(kind: TokenKind, matcher: Matcher) -> Self {
        Self { kind, matcher }
    }

    pub fn find_at(&self, code: &str, from: usize) -> Option<Range<usize>> {
        self.matcher.find_at(code, from)
    }
}

/// Ordered rules for one language. Position in the list only breaks ties
/// between rules matching at the same offset.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<TokenRule>,
}

impl RuleSet {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn push(&mut self, kind: TokenKind, matcher: Matcher) {
        self.rules.push(TokenRule::new(kind, matcher));
    }

    /// Builder-style [`RuleSet::push`].
    pub fn with(mut self, kind: TokenKind, matcher: Matcher) -> Self {
        self.push(kind, matcher);
        self
    }

    /// New set named `name` whose rules are `rules` followed by this set's rules.
    pub fn extend_front<S: Into<String>>(&self, name: S, rules: Vec<TokenRule>) -> Self {
        let mut combined = rules;
        combined.extend(self.rules.iter().cloned());
        Self {
            name: name.into(),
            rules: combined,
        }
    }
}
