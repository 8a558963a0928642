//! HTML rendering of token streams.
//!
//! Text tokens are escaped and emitted bare; every other token is escaped and
//! wrapped in `<span class="token KIND">`. The result is a fragment meant to
//! sit inside a `<pre><code>` container, which [`wrap_code_block`] can add.

pub mod config;
pub mod escape;

use crate::tokenizer::token::Token;
use config::FormatterConfig;
pub use escape::{escape_html, unescape_html};

#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    config: FormatterConfig,
}

impl HtmlFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn format(&self, tokens: &[Token<'_>]) -> String {
        let mut output = String::new();
        for token in tokens {
            self.format_token(token, &mut output);
        }
        output
    }

    fn format_token(&self, token: &Token<'_>, output: &mut String) {
        let content = escape_html(token.text);
        if token.is_text() {
            output.push_str(&content);
            return;
        }
        output.push_str("<span class=\"");
        if !self.config.class_prefix.is_empty() {
            output.push_str(&escape_html(&self.config.class_prefix));
            output.push(' ');
        }
        output.push_str(token.kind.as_ref());
        output.push_str("\">");
        output.push_str(&content);
        output.push_str("</span>");
    }
}

/// Wraps a highlighted fragment in `<pre><code class="language-LANG">`.
pub fn wrap_code_block(fragment: &str, language: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        escape_html(language),
        fragment
    )
}
