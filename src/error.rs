use thiserror::Error;

/// Errors raised while building rule sets, registries or configuration.
///
/// Highlighting itself never fails; these only surface when compiling
/// user-supplied patterns or loading a config file.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Capture group {group} does not exist in pattern {pattern:?}")]
    InvalidGroup { group: usize, pattern: String },
    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(String),
    #[error("Unknown base language: {0}")]
    UnknownBaseLanguage(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HighlightResult<T> = Result<T, HighlightError>;

// エラー作成用のヘルパー関数
impl HighlightError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        HighlightError::Config(message.into())
    }

    pub fn invalid_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        HighlightError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
