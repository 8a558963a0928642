use lazy_static::lazy_static;
use std::sync::Arc;

use crate::config::HighlighterConfig;
use crate::formatter::{escape_html, HtmlFormatter};
use crate::tokenizer::registry::{LanguageRegistry, Selection};
use crate::tokenizer::rule::TokenKind;
use crate::tokenizer::token::{Token, Tokenizer};
use crate::HighlightResult;

lazy_static! {
    static ref DEFAULT_HIGHLIGHTER: Highlighter =
        Highlighter::new(LanguageRegistry::global().clone(), HtmlFormatter::default());
}

/// Registry plus formatter: the whole highlight pipeline behind one value.
///
/// Holds no per-call state, so a single instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    registry: LanguageRegistry,
    formatter: HtmlFormatter,
}

impl Highlighter {
    pub fn new(registry: LanguageRegistry, formatter: HtmlFormatter) -> Self {
        Self {
            registry,
            formatter,
        }
    }

    pub fn from_config(config: &HighlighterConfig) -> HighlightResult<Self> {
        Ok(Self::new(
            config.build_registry()?,
            HtmlFormatter::new(config.formatter_config()),
        ))
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Highlighted HTML fragment for `code`. `None` means the default language.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        if code.is_empty() {
            return String::new();
        }
        match self.select(language) {
            Selection::Plain => escape_html(code).into_owned(),
            Selection::Rules(rules) => {
                let tokens = Tokenizer::new(&rules).tokenize(code);
                self.formatter.format(&tokens)
            }
        }
    }

    /// Raw tokens for `code`; the plain sentinel yields one text token.
    pub fn tokens<'a>(&self, code: &'a str, language: Option<&str>) -> Vec<Token<'a>> {
        if code.is_empty() {
            return Vec::new();
        }
        match self.select(language) {
            Selection::Plain => vec![Token::new(TokenKind::Text, code, 0)],
            Selection::Rules(rules) => Tokenizer::new(&rules).tokenize(code),
        }
    }

    fn select(&self, language: Option<&str>) -> Selection {
        match language {
            Some(language) => self.registry.resolve(language),
            None => Selection::Rules(Arc::clone(self.registry.default_rule_set())),
        }
    }
}

/// Highlights with the built-in languages and default formatting.
pub fn highlight_code(code: &str, language: Option<&str>) -> String {
    DEFAULT_HIGHLIGHTER.highlight(code, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_javascript() {
        assert_eq!(
            highlight_code("let", None),
            highlight_code("let", Some("javascript"))
        );
        assert_eq!(
            highlight_code("let", None),
            "<span class=\"token keyword\">let</span>"
        );
    }

    #[test]
    fn test_highlighter_matches_free_function() {
        let highlighter = Highlighter::default();
        let code = "def f(x):\n    return x * 2  # double";
        assert_eq!(
            highlighter.highlight(code, Some("python")),
            highlight_code(code, Some("python"))
        );
    }

    #[test]
    fn test_tokens_for_plain_language() {
        let highlighter = Highlighter::default();
        let tokens = highlighter.tokens("a < b", Some("no-color"));
        assert_eq!(tokens, vec![Token::new(TokenKind::Text, "a < b", 0)]);
        assert!(highlighter.tokens("", Some("python")).is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = HighlighterConfig {
            class_prefix: "hl".to_string(),
            ..Default::default()
        };
        let highlighter = Highlighter::from_config(&config).unwrap();
        assert_eq!(
            highlighter.highlight("42", Some("json")),
            "<span class=\"hl number\">42</span>"
        );
    }

    #[test]
    fn test_configured_default_language() {
        let config = HighlighterConfig {
            default_language: "python".to_string(),
            ..Default::default()
        };
        let highlighter = Highlighter::from_config(&config).unwrap();
        assert_eq!(
            highlighter.highlight("print", None),
            "<span class=\"token builtin\">print</span>"
        );
        assert_eq!(
            highlighter.highlight("print", Some("cobol")),
            highlighter.highlight("print", None)
        );
    }
}
