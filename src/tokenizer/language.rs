//! Per-language rule sets, layered over the shared pattern library and the
//! keyword tables.
//!
//! Every set lists its comment and string rules first so they win ties
//! against operators starting at the same offset.

use super::keyword::{keyword_matcher, word_pattern, Language};
use super::pattern::{shared_matcher, Matcher};
use super::rule::{RuleSet, TokenKind};
use crate::error::HighlightResult;

/// Identifier immediately followed by `(`.
const FUNCTION_CALL: &str = r"((?:\b[A-Za-z_]|\$)[\w$]*)\(";
const CLASS_NAME: &str = r"\b[A-Z][A-Za-z0-9_]*\b";
const IDENTIFIER: &str = r"\b[A-Za-z_]\w*";

const JS_BUILTINS: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "JSON", "Map", "Math", "Number", "Object", "Promise",
    "RegExp", "Set", "String", "Symbol", "WeakMap", "clearTimeout", "console", "document",
    "exports", "fetch", "globalThis", "module", "parseFloat", "parseInt", "process",
    "require", "setInterval", "setTimeout", "window",
];

const PYTHON_BUILTINS: &[&str] = &[
    "abs", "all", "any", "bool", "callable", "classmethod", "dict", "dir", "enumerate",
    "filter", "float", "format", "getattr", "hasattr", "hash", "id", "input", "int",
    "isinstance", "issubclass", "iter", "len", "list", "map", "max", "min", "next", "object",
    "open", "print", "property", "range", "repr", "reversed", "round", "set", "setattr",
    "sorted", "staticmethod", "str", "sum", "super", "tuple", "type", "vars", "zip",
];

/// Python strings: optional prefix, triple-quoted blocks first.
const PYTHON_STRING: &str = r#"(?s)(?:\b[rRbBuUfF]{1,2})?(?:"""(?:\\.|[^\\])*?"""|'''(?:\\.|[^\\])*?'''|"(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*')"#;
const HASH_COMMENT: &str = r"#[^\n]*";
const SQL_COMMENT: &str = r"--[^\n]*|(?s:/\*.*?\*/)";
const BLOCK_COMMENT: &str = r"(?s)/\*.*?\*/";
const SIGIL_VARIABLE: &str = r"\$[A-Za-z_]\w*";
const BASH_VARIABLE: &str = r"\$(?:\{[^}\n]*\}|[A-Za-z_]\w*|[0-9@#?*!$-])";

const HTML_COMMENT: &str = r"(?s)<!--.*?-->";
const HTML_TAG: &str = r"</?[A-Za-z][\w:.-]*|<![A-Za-z]+|/?>";
const HTML_ATTR_NAME: &str = r"([A-Za-z_:@][\w:.-]*)\s*=";
const HTML_ATTR_VALUE: &str = r#""[^"]*"|'[^']*'"#;

const CSS_SELECTOR: &str = r"([^\s{};/][^{};/]*?)\s*\{";
const CSS_PROPERTY: &str = r"([\w-]+)\s*:";
const CSS_VALUE: &str = r":[^;{}]*;";
const CSS_IMPORTANT: &str = r"!important\b";

const JSON_KEY: &str = r#"("(?:\\.|[^"\\])*")\s*:"#;

/// Builds the rule set for a built-in language.
pub fn rule_set(language: Language) -> HighlightResult<RuleSet> {
    match language {
        Language::JavaScript | Language::TypeScript => javascript_family(language),
        Language::Python => python(),
        Language::Java | Language::CSharp => c_family(language),
        Language::Php => php(),
        Language::Bash => bash(),
        Language::Sql => sql(),
        Language::Html => html(),
        Language::Css => css(),
        Language::Json => json(),
    }
}

/// String, comment, number and symbol rules only.
pub fn generic_rule_set<S: Into<String>>(name: S) -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(name);
    for kind in [TokenKind::Comment, TokenKind::String] {
        set.push(kind, shared_matcher(kind)?);
    }
    push_literals_and_symbols(&mut set)?;
    Ok(set)
}

fn push_keywords(set: &mut RuleSet, language: Language) -> HighlightResult<()> {
    if let Some(matcher) = keyword_matcher(language)? {
        set.push(TokenKind::Keyword, matcher);
    }
    Ok(())
}

fn push_literals_and_symbols(set: &mut RuleSet) -> HighlightResult<()> {
    for kind in [
        TokenKind::Boolean,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ] {
        set.push(kind, shared_matcher(kind)?);
    }
    Ok(())
}

fn javascript_family(language: Language) -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(language.as_ref())
        .with(TokenKind::Comment, shared_matcher(TokenKind::Comment)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?);
    push_keywords(&mut set, language)?;
    set.push(
        TokenKind::Function,
        Matcher::new(FUNCTION_CALL)?.with_group(1)?,
    );
    set.push(TokenKind::ClassName, Matcher::new(CLASS_NAME)?);
    set.push(TokenKind::Builtin, Matcher::new(&word_pattern(JS_BUILTINS))?);
    push_literals_and_symbols(&mut set)?;
    Ok(set)
}

fn python() -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(Language::Python.as_ref())
        .with(TokenKind::Comment, Matcher::new(HASH_COMMENT)?)
        .with(TokenKind::String, Matcher::new(PYTHON_STRING)?);
    push_keywords(&mut set, Language::Python)?;
    set.push(
        TokenKind::Function,
        Matcher::new(IDENTIFIER)?.preceded_by(r"\bdef\s+")?,
    );
    set.push(
        TokenKind::ClassName,
        Matcher::new(IDENTIFIER)?.preceded_by(r"\bclass\s+")?,
    );
    set.push(
        TokenKind::Builtin,
        Matcher::new(&word_pattern(PYTHON_BUILTINS))?,
    );
    // `:` opens blocks and slices, so punctuation outranks operator here.
    for kind in [
        TokenKind::Boolean,
        TokenKind::Number,
        TokenKind::Punctuation,
        TokenKind::Operator,
    ] {
        set.push(kind, shared_matcher(kind)?);
    }
    Ok(set)
}

fn c_family(language: Language) -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(language.as_ref())
        .with(TokenKind::Comment, shared_matcher(TokenKind::Comment)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?);
    push_keywords(&mut set, language)?;
    set.push(
        TokenKind::Function,
        Matcher::new(FUNCTION_CALL)?.with_group(1)?,
    );
    push_literals_and_symbols(&mut set)?;
    Ok(set)
}

fn php() -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(Language::Php.as_ref())
        .with(TokenKind::Comment, shared_matcher(TokenKind::Comment)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?)
        .with(TokenKind::Variable, Matcher::new(SIGIL_VARIABLE)?);
    push_keywords(&mut set, Language::Php)?;
    set.push(
        TokenKind::Function,
        Matcher::new(FUNCTION_CALL)?.with_group(1)?,
    );
    push_literals_and_symbols(&mut set)?;
    Ok(set)
}

fn bash() -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(Language::Bash.as_ref())
        .with(TokenKind::Comment, Matcher::new(HASH_COMMENT)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?)
        .with(TokenKind::Variable, Matcher::new(BASH_VARIABLE)?);
    push_keywords(&mut set, Language::Bash)?;
    for kind in [
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ] {
        set.push(kind, shared_matcher(kind)?);
    }
    Ok(set)
}

fn sql() -> HighlightResult<RuleSet> {
    let mut set = RuleSet::new(Language::Sql.as_ref())
        .with(TokenKind::Comment, Matcher::new(SQL_COMMENT)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?);
    push_keywords(&mut set, Language::Sql)?;
    for kind in [
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ] {
        set.push(kind, shared_matcher(kind)?);
    }
    Ok(set)
}

fn html() -> HighlightResult<RuleSet> {
    Ok(RuleSet::new(Language::Html.as_ref())
        .with(TokenKind::Comment, Matcher::new(HTML_COMMENT)?)
        .with(TokenKind::Tag, Matcher::new(HTML_TAG)?)
        .with(
            TokenKind::AttrName,
            Matcher::new(HTML_ATTR_NAME)?.with_group(1)?,
        )
        .with(
            TokenKind::AttrValue,
            Matcher::new(HTML_ATTR_VALUE)?.preceded_by(r"=\s*")?,
        )
        .with(TokenKind::String, shared_matcher(TokenKind::String)?))
}

fn css() -> HighlightResult<RuleSet> {
    Ok(RuleSet::new(Language::Css.as_ref())
        .with(TokenKind::Comment, Matcher::new(BLOCK_COMMENT)?)
        .with(
            TokenKind::Selector,
            Matcher::new(CSS_SELECTOR)?.with_group(1)?,
        )
        .with(
            TokenKind::Property,
            Matcher::new(CSS_PROPERTY)?.with_group(1)?,
        )
        .with(TokenKind::Value, Matcher::new(CSS_VALUE)?)
        .with(TokenKind::Important, Matcher::new(CSS_IMPORTANT)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?)
        .with(
            TokenKind::Punctuation,
            shared_matcher(TokenKind::Punctuation)?,
        ))
}

fn json() -> HighlightResult<RuleSet> {
    Ok(RuleSet::new(Language::Json.as_ref())
        .with(TokenKind::Property, Matcher::new(JSON_KEY)?.with_group(1)?)
        .with(TokenKind::String, shared_matcher(TokenKind::String)?)
        .with(TokenKind::Boolean, shared_matcher(TokenKind::Boolean)?)
        .with(TokenKind::Number, shared_matcher(TokenKind::Number)?)
        .with(
            TokenKind::Punctuation,
            shared_matcher(TokenKind::Punctuation)?,
        )
        .with(TokenKind::Operator, shared_matcher(TokenKind::Operator)?))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn kinds(set: &RuleSet) -> Vec<TokenKind> {
        set.rules().iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_every_language_builds() {
        for language in Language::iter() {
            let set = rule_set(language).unwrap();
            assert_eq!(set.name(), language.as_ref());
            assert!(!set.is_empty());
        }
    }

    #[test]
    fn test_comment_and_string_come_first() {
        for language in Language::iter() {
            let set = rule_set(language).unwrap();
            let first = kinds(&set);
            match language {
                Language::Html | Language::Css => assert_eq!(first[0], TokenKind::Comment),
                Language::Json => assert_eq!(first[1], TokenKind::String),
                _ => assert_eq!(&first[..2], &[TokenKind::Comment, TokenKind::String]),
            }
        }
    }

    #[test]
    fn test_javascript_order() {
        let set = rule_set(Language::JavaScript).unwrap();
        assert_eq!(
            kinds(&set),
            vec![
                TokenKind::Comment,
                TokenKind::String,
                TokenKind::Keyword,
                TokenKind::Function,
                TokenKind::ClassName,
                TokenKind::Builtin,
                TokenKind::Boolean,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_sigil_languages_have_variables() {
        for language in [Language::Php, Language::Bash] {
            let set = rule_set(language).unwrap();
            assert!(kinds(&set).contains(&TokenKind::Variable));
        }
        let java = rule_set(Language::Java).unwrap();
        assert!(!kinds(&java).contains(&TokenKind::Variable));
    }

    #[test]
    fn test_generic_rule_set() {
        let set = generic_rule_set("plain").unwrap();
        assert_eq!(set.name(), "plain");
        assert!(!kinds(&set).contains(&TokenKind::Keyword));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_python_triple_quoted_string() {
        let matcher = Matcher::new(PYTHON_STRING).unwrap();
        let code = "x = \"\"\"a\n\"b\"\n\"\"\" + 'c'";
        let range = matcher.find_at(code, 0).unwrap();
        assert_eq!(&code[range], "\"\"\"a\n\"b\"\n\"\"\"");
        assert_eq!(
            matcher.find_at("f'{x}'", 0).map(|r| r.start),
            Some(0)
        );
    }

    #[test]
    fn test_css_selector_stops_before_brace() {
        let matcher = Matcher::new(CSS_SELECTOR).unwrap().with_group(1).unwrap();
        let code = ".a, .b:hover {\n  color: red;\n}";
        let range = matcher.find_at(code, 0).unwrap();
        assert_eq!(&code[range], ".a, .b:hover");
        assert_eq!(matcher.find_at(code, 14), None);
    }

    #[test]
    fn test_bash_variable_forms() {
        let matcher = Matcher::new(BASH_VARIABLE).unwrap();
        for (code, expected) in [
            ("echo $HOME", "$HOME"),
            ("echo ${name}", "${name}"),
            ("echo $1", "$1"),
            ("echo $@", "$@"),
        ] {
            let range = matcher.find_at(code, 0).unwrap();
            assert_eq!(&code[range], expected);
        }
    }
}
