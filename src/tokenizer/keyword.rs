use super::pattern::Matcher;
use crate::error::HighlightResult;

/// Languages with a built-in rule set.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    Php,
    Bash,
    Sql,
    Html,
    Css,
    Json,
}

const JAVASCRIPT: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "function", "get", "if", "import", "in", "instanceof", "let", "new", "of", "return",
    "set", "static", "super", "switch", "this", "throw", "try", "typeof", "var", "void",
    "while", "with", "yield",
];

const TYPESCRIPT_EXTRA: &[&str] = &[
    "abstract", "any", "as", "asserts", "bigint", "boolean", "declare", "enum", "implements",
    "infer", "interface", "is", "keyof", "module", "namespace", "never", "number", "object",
    "private", "protected", "public", "readonly", "satisfies", "string", "symbol", "type",
    "unknown",
];

const PYTHON: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case",
    "class", "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
    "global", "if", "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass",
    "raise", "return", "try", "while", "with", "yield",
];

const JAVA: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "permits", "private", "protected",
    "public", "record", "return", "sealed", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "try", "var", "void", "volatile",
    "while", "yield",
];

const CSHARP: &[&str] = &[
    "abstract", "as", "async", "await", "base", "bool", "break", "byte", "case", "catch",
    "char", "checked", "class", "const", "continue", "decimal", "default", "delegate", "do",
    "double", "dynamic", "else", "enum", "event", "explicit", "extern", "finally", "fixed",
    "float", "for", "foreach", "get", "goto", "if", "implicit", "in", "init", "int",
    "interface", "internal", "is", "lock", "long", "namespace", "new", "object", "operator",
    "out", "override", "params", "private", "protected", "public", "readonly", "record",
    "ref", "return", "sbyte", "sealed", "set", "short", "sizeof", "stackalloc", "static",
    "string", "struct", "switch", "this", "throw", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "var", "virtual", "void", "volatile", "while",
    "yield",
];

const PHP: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "extends",
    "final", "finally", "fn", "for", "foreach", "function", "global", "goto", "if",
    "implements", "include", "include_once", "instanceof", "insteadof", "interface", "isset",
    "list", "match", "namespace", "new", "or", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "static", "switch", "throw", "trait",
    "try", "unset", "use", "var", "while", "xor", "yield",
];

const BASH: &[&str] = &[
    "alias", "break", "case", "cd", "continue", "declare", "do", "done", "echo", "elif",
    "else", "esac", "eval", "exec", "exit", "export", "fi", "for", "function", "if", "in",
    "local", "printf", "read", "readonly", "return", "select", "set", "shift", "source",
    "test", "then", "time", "trap", "unset", "until", "while",
];

const SQL: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "AVG", "BEGIN", "BETWEEN", "BOOLEAN", "BY",
    "CASE", "CHECK", "COMMIT", "CONSTRAINT", "COUNT", "CREATE", "CROSS", "DATE", "DEFAULT",
    "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FOREIGN", "FROM", "FULL",
    "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INT", "INTEGER", "INTO", "IS",
    "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "MAX", "MIN", "NOT", "NULL", "OFFSET", "ON", "OR",
    "ORDER", "OUTER", "PRIMARY", "REFERENCES", "RETURNING", "RIGHT", "ROLLBACK", "SELECT",
    "SET", "SUM", "TABLE", "TEXT", "THEN", "TIMESTAMP", "TRANSACTION", "UNION", "UNIQUE",
    "UPDATE", "VALUES", "VARCHAR", "VIEW", "WHEN", "WHERE", "WITH",
];

/// Reserved words for `language`. `None` means the language gets no
/// keyword highlighting.
pub fn keywords(language: Language) -> Option<Vec<&'static str>> {
    let words = match language {
        Language::JavaScript => JAVASCRIPT.to_vec(),
        Language::TypeScript => JAVASCRIPT.iter().chain(TYPESCRIPT_EXTRA).copied().collect(),
        Language::Python => PYTHON.to_vec(),
        Language::Java => JAVA.to_vec(),
        Language::CSharp => CSHARP.to_vec(),
        Language::Php => PHP.to_vec(),
        Language::Bash => BASH.to_vec(),
        Language::Sql => SQL.to_vec(),
        Language::Html | Language::Css | Language::Json => return None,
    };
    Some(words)
}

/// SQL is conventionally written in either case.
pub fn is_case_insensitive(language: Language) -> bool {
    matches!(language, Language::Sql)
}

/// Whole-word alternation over `words`.
pub fn word_pattern(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"\b(?:{})\b", escaped.join("|"))
}

pub fn keyword_matcher(language: Language) -> HighlightResult<Option<Matcher>> {
    let Some(words) = keywords(language) else {
        return Ok(None);
    };
    let pattern = word_pattern(&words);
    let matcher = if is_case_insensitive(language) {
        Matcher::case_insensitive(&pattern)?
    } else {
        Matcher::new(&pattern)?
    };
    Ok(Some(matcher))
}
