//! # Hikari: lightweight syntax highlighting to HTML
//!
//! Hikari turns a source snippet and a language tag into an HTML fragment
//! where recognised pieces of code are wrapped in
//! `<span class="token KIND">` elements. It is an approximate highlighter:
//! a handful of regular expressions per language and a greedy scan, no
//! parsing.
//!
//! ## Processing Pipeline
//!
//! ```text
//! (code, language) → Registry → Tokenizer → HtmlFormatter → HTML fragment
//! ```
//!
//! ### Stage 1: Language Selection
//!
//! The [`tokenizer::registry`] resolves the language tag case-insensitively,
//! follows aliases and falls back to JavaScript for unknown tags. The
//! `no-color` sentinel skips tokenization and returns escaped text.
//!
//! ### Stage 2: Tokenization
//!
//! The [`tokenizer`] scans the input with the selected rule set. The earliest
//! match wins, ties go to the rule listed first, and unmatched stretches are
//! kept as plain text, so no character is ever lost or duplicated.
//!
//! ### Stage 3: Rendering
//!
//! The [`formatter`] escapes every token and wraps the classified ones in
//! spans.
//!
//! ## Configuration
//!
//! [`config::HighlighterConfig`] adds aliases and custom languages from JSON,
//! and changes the default language, plain sentinel or CSS class prefix.
//!
//! ## Usage Example
//!
//! ```rust
//! let html = hikari::highlight_code("a < b && c", Some("no-color"));
//! assert_eq!(html, "a &lt; b &amp;&amp; c");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod highlighter;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use highlighter::{highlight_code, Highlighter};
