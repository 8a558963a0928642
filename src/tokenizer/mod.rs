//! # Tokenizer Component
//!
//! Lightweight, approximate lexical classification of source code for
//! display. There is no parsing here: no nesting awareness, no bracket
//! matching, just a set of regular expressions per language and a scan loop
//! that picks the earliest match.
//!
//! ## Component Structure
//!
//! * [`pattern`]: stateless [`Matcher`](pattern::Matcher) and the patterns shared by every language
//! * [`keyword`]: the [`Language`](keyword::Language) enum and per-language reserved words
//! * [`rule`]: [`TokenKind`](rule::TokenKind), [`TokenRule`](rule::TokenRule) and [`RuleSet`](rule::RuleSet)
//! * [`language`]: composition of rule sets for each built-in language
//! * [`registry`]: immutable language-identifier to rule-set map with aliases
//! * [`token`]: the [`Tokenizer`](token::Tokenizer) scan loop
//!
//! ## Scan Rules
//!
//! 1. Every rule searches from the cursor for its earliest match.
//! 2. The match starting first wins; rules listed earlier win ties.
//! 3. Anything skipped over becomes a `text` token.
//! 4. When nothing matches, the rest of the input is one `text` token.
//!
//! Token texts always concatenate back to the input.
//!
//! ## Usage Example
//!
//! ```rust
//! use hikari::tokenizer::{registry::{LanguageRegistry, Selection}, rule::TokenKind, token::Tokenizer};
//!
//! let registry = LanguageRegistry::global();
//! if let Selection::Rules(rules) = registry.resolve("python") {
//!     let tokens = Tokenizer::new(&rules).tokenize("return x");
//!     assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! }
//! ```

pub mod keyword;
pub mod language;
pub mod pattern;
pub mod registry;
pub mod rule;
pub mod token;

pub use keyword::Language;
pub use registry::{LanguageRegistry, Selection};
pub use rule::{RuleSet, TokenKind, TokenRule};
pub use token::{Token, Tokenizer};
