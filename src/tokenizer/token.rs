use std::ops::Range;

use super::rule::{RuleSet, TokenKind};

/// A classified slice of the input. `start` is a byte offset into the
/// original code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self { kind, text, start }
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }
}

/// Last search result of one rule during a single scan.
#[derive(Debug, Clone)]
enum Lookup {
    Unsearched,
    Found { anchor: usize, token: Range<usize> },
    Exhausted,
}

/// Greedy leftmost-match scanner over one rule set.
///
/// The tokenizer only borrows its rules; every piece of cursor state lives
/// inside [`Tokenizer::tokenize`], so one rule set can serve any number of
/// concurrent scans.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'r> {
    rules: &'r RuleSet,
}

impl<'r> Tokenizer<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Splits `code` into tokens whose texts concatenate back to `code`.
    ///
    /// At each step the rule whose match starts earliest wins; ties go to the
    /// rule listed first. Unmatched stretches become [`TokenKind::Text`].
    #[tracing::instrument(level = "debug", skip(self, code), fields(language = self.rules.name(), len = code.len()))]
    pub fn tokenize<'a>(&self, code: &'a str) -> Vec<Token<'a>> {
        let rules = self.rules.rules();
        let mut lookups = vec![Lookup::Unsearched; rules.len()];
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while cursor < code.len() {
            let mut best: Option<(usize, Range<usize>)> = None;

            for (index, rule) in rules.iter().enumerate() {
                // A match found from an earlier cursor is still the earliest
                // one as long as the cursor has not passed its anchor.
                let cached = match &lookups[index] {
                    Lookup::Found { anchor, token } if *anchor >= cursor => Some(Some(token.clone())),
                    Lookup::Exhausted => Some(None),
                    _ => None,
                };
                let candidate = match cached {
                    Some(candidate) => candidate,
                    None => {
                        let found = rule.matcher.search(code, cursor);
                        lookups[index] = match &found {
                            Some((anchor, token)) => Lookup::Found {
                                anchor: *anchor,
                                token: token.clone(),
                            },
                            None => Lookup::Exhausted,
                        };
                        found.map(|(_, token)| token)
                    }
                };

                if let Some(token) = candidate {
                    let earlier = match &best {
                        Some((_, current)) => token.start < current.start,
                        None => true,
                    };
                    if earlier {
                        best = Some((index, token));
                    }
                }
            }

            match best {
                Some((index, token)) => {
                    if token.start > cursor {
                        tokens.push(Token::new(
                            TokenKind::Text,
                            &code[cursor..token.start],
                            cursor,
                        ));
                    }
                    let kind = rules[index].kind;
                    tracing::trace!("{} at {}..{}", kind, token.start, token.end);
                    tokens.push(Token::new(kind, &code[token.clone()], token.start));
                    cursor = token.end;
                }
                None => {
                    tokens.push(Token::new(TokenKind::Text, &code[cursor..], cursor));
                    break;
                }
            }
        }

        tokens
    }
}
