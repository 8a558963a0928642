use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use tracing::debug;

use super::keyword::Language;
use super::language::rule_set;
use super::rule::RuleSet;
use crate::error::{HighlightError, HighlightResult};

pub const DEFAULT_LANGUAGE: &str = "javascript";
/// Sentinel language that skips tokenization entirely.
pub const PLAIN_LANGUAGE: &str = "no-color";

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("cs", "csharp"),
    ("c#", "csharp"),
    ("sh", "bash"),
    ("shell", "bash"),
    ("zsh", "bash"),
    ("htm", "html"),
    ("xml", "html"),
    ("svg", "html"),
    ("text", PLAIN_LANGUAGE),
    ("plain", PLAIN_LANGUAGE),
    ("plaintext", PLAIN_LANGUAGE),
    ("none", PLAIN_LANGUAGE),
];

lazy_static! {
    static ref BUILTIN_REGISTRY: LanguageRegistry =
        LanguageRegistry::builtin().expect("built-in rule sets must compile");
}

fn normalize(language: &str) -> String {
    language.trim().to_lowercase()
}

/// Outcome of looking a language up.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Escape only, no tokens.
    Plain,
    Rules(Arc<RuleSet>),
}

/// Immutable map from language identifier to rule set, built once at
/// startup.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    rule_sets: HashMap<String, Arc<RuleSet>>,
    aliases: HashMap<String, String>,
    default_rule_set: Arc<RuleSet>,
    plain_language: String,
}

impl LanguageRegistry {
    pub fn builder() -> LanguageRegistryBuilder {
        LanguageRegistryBuilder::new()
    }

    /// Fresh registry holding every built-in language and alias.
    pub fn builtin() -> HighlightResult<Self> {
        Self::builder().with_builtins()?.build()
    }

    /// Process-wide built-in registry.
    pub fn global() -> &'static LanguageRegistry {
        &BUILTIN_REGISTRY
    }

    /// Case-insensitive lookup with alias resolution. Unknown identifiers
    /// fall back to the default rule set.
    pub fn resolve(&self, language: &str) -> Selection {
        let key = self.canonical(language);
        if key == self.plain_language {
            return Selection::Plain;
        }
        match self.rule_sets.get(&key) {
            Some(set) => Selection::Rules(Arc::clone(set)),
            None => {
                debug!(
                    "Unknown language {:?}, falling back to {}",
                    language,
                    self.default_rule_set.name()
                );
                Selection::Rules(Arc::clone(&self.default_rule_set))
            }
        }
    }

    /// Registered rule set for `language`, without fallback.
    pub fn get(&self, language: &str) -> Option<&Arc<RuleSet>> {
        self.rule_sets.get(&self.canonical(language))
    }

    pub fn contains(&self, language: &str) -> bool {
        self.get(language).is_some()
    }

    pub fn default_rule_set(&self) -> &Arc<RuleSet> {
        &self.default_rule_set
    }

    pub fn plain_language(&self) -> &str {
        &self.plain_language
    }

    /// Registered identifiers, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rule_sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `(alias, target)` pairs, sorted by alias.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    fn canonical(&self, language: &str) -> String {
        let key = normalize(language);
        match self.aliases.get(&key) {
            Some(target) => target.clone(),
            None => key,
        }
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::global().clone()
    }
}

#[derive(Debug, Clone)]
pub struct LanguageRegistryBuilder {
    rule_sets: HashMap<String, Arc<RuleSet>>,
    aliases: HashMap<String, String>,
    default_language: String,
    plain_language: String,
}

impl Default for LanguageRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRegistryBuilder {
    pub fn new() -> Self {
        Self {
            rule_sets: HashMap::new(),
            aliases: HashMap::new(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            plain_language: PLAIN_LANGUAGE.to_string(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn with_builtins(mut self) -> HighlightResult<Self> {
        for language in Language::iter() {
            self = self.register(rule_set(language)?);
        }
        for (alias, target) in BUILTIN_ALIASES {
            self = self.alias(alias, target);
        }
        Ok(self)
    }

    /// Adds `set` under its own name, replacing any earlier set of that name.
    pub fn register(mut self, set: RuleSet) -> Self {
        let key = normalize(set.name());
        self.aliases.remove(&key);
        self.rule_sets.insert(key, Arc::new(set));
        self
    }

    pub fn alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(normalize(alias), normalize(target));
        self
    }

    pub fn default_language(mut self, language: &str) -> Self {
        self.default_language = normalize(language);
        self
    }

    pub fn plain_language(mut self, language: &str) -> Self {
        self.plain_language = normalize(language);
        self
    }

    /// Rule set registered so far under `language` or one of its aliases.
    pub fn get(&self, language: &str) -> Option<&Arc<RuleSet>> {
        let key = normalize(language);
        let key = self.aliases.get(&key).cloned().unwrap_or(key);
        self.rule_sets.get(&key)
    }

    pub fn build(self) -> HighlightResult<LanguageRegistry> {
        let default_rule_set = self
            .get(&self.default_language)
            .cloned()
            .ok_or_else(|| {
                HighlightError::config(format!(
                    "Default language {} is not registered",
                    self.default_language
                ))
            })?;
        debug!(
            "Language registry built with {} rule sets",
            self.rule_sets.len()
        );
        Ok(LanguageRegistry {
            rule_sets: self.rule_sets,
            aliases: self.aliases,
            default_rule_set,
            plain_language: self.plain_language,
        })
    }
}
