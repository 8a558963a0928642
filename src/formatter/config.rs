#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Class placed before the token kind, as in `class="token keyword"`.
    pub class_prefix: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            class_prefix: "token".to_string(),
        }
    }
}
