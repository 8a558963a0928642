use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::BufReader, path::Path, str::FromStr};

use crate::{
    formatter::config::FormatterConfig,
    tokenizer::{
        pattern::Matcher,
        registry::{LanguageRegistry, DEFAULT_LANGUAGE, PLAIN_LANGUAGE},
        rule::{RuleSet, TokenKind, TokenRule},
    },
    HighlightError, HighlightResult,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlighterConfig {
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default = "default_plain_language")]
    pub plain_language: String,

    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,

    /// Extra `alias -> language` mappings on top of the built-in ones.
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    /// Additional languages, keyed by identifier.
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LanguageConfig {
    /// Registered language whose rules follow this language's own rules.
    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleConfig {
    /// Token kind name, e.g. `keyword` or `class-name`.
    pub kind: String,

    pub pattern: String,

    /// Capture group to emit; 0 is the whole match.
    #[serde(default)]
    pub group: usize,

    /// Guard the text before the token must end with.
    #[serde(default)]
    pub preceded_by: Option<String>,

    #[serde(default)]
    pub case_insensitive: bool,
}

impl RuleConfig {
    pub fn compile(&self) -> HighlightResult<TokenRule> {
        let kind = TokenKind::from_str(&self.kind)
            .map_err(|_| HighlightError::UnknownTokenKind(self.kind.clone()))?;
        let mut matcher = if self.case_insensitive {
            Matcher::case_insensitive(&self.pattern)?
        } else {
            Matcher::new(&self.pattern)?
        };
        if self.group > 0 {
            matcher = matcher.with_group(self.group)?;
        }
        if let Some(guard) = &self.preceded_by {
            matcher = matcher.preceded_by(guard)?;
        }
        Ok(TokenRule::new(kind, matcher))
    }
}

impl LanguageConfig {
    pub fn compile(&self) -> HighlightResult<Vec<TokenRule>> {
        self.rules.iter().map(RuleConfig::compile).collect()
    }
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            plain_language: default_plain_language(),
            class_prefix: default_class_prefix(),
            aliases: HashMap::new(),
            languages: HashMap::new(),
        }
    }
}

impl HighlighterConfig {
    // JSONファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> HighlightResult<Self> {
        from_file(path)
    }

    pub fn from_str(s: &str) -> HighlightResult<Self> {
        from_str(s)
    }

    pub fn formatter_config(&self) -> FormatterConfig {
        FormatterConfig {
            class_prefix: self.class_prefix.clone(),
        }
    }

    /// Built-in languages plus everything this config adds.
    ///
    /// Custom languages are registered in name order, so `extends` may name a
    /// built-in language or a custom one sorting earlier.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn build_registry(&self) -> HighlightResult<LanguageRegistry> {
        let mut builder = LanguageRegistry::builder()
            .with_builtins()?
            .default_language(&self.default_language)
            .plain_language(&self.plain_language);

        for (alias, target) in &self.aliases {
            builder = builder.alias(alias, target);
        }

        let mut names: Vec<&String> = self.languages.keys().collect();
        names.sort();
        for name in names {
            let language = &self.languages[name];
            let rules = language.compile()?;
            let set = match &language.extends {
                Some(base) => builder
                    .get(base)
                    .ok_or_else(|| HighlightError::UnknownBaseLanguage(base.clone()))?
                    .extend_front(name.as_str(), rules),
                None => rules
                    .into_iter()
                    .fold(RuleSet::new(name.as_str()), |set, rule| {
                        set.with(rule.kind, rule.matcher)
                    }),
            };
            tracing::debug!("Registering language {} with {} rules", name, set.len());
            builder = builder.register(set);
        }

        builder.build()
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> HighlightResult<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| HighlightError::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> HighlightResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| HighlightError::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_plain_language() -> String {
    PLAIN_LANGUAGE.to_string()
}

fn default_class_prefix() -> String {
    "token".to_string()
}
