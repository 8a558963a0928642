use hikari::highlight_code;
use pretty_assertions::assert_eq;

use crate::span;

#[test]
fn test_typescript_additions() {
    let html = highlight_code("interface User { name: string; }", Some("typescript"));
    assert!(html.contains(&span("keyword", "interface")));
    assert!(html.contains(&span("keyword", "string")));
    assert!(html.contains(&span("class-name", "User")));
    assert!(html.contains(&span("operator", ":")));

    let html = highlight_code("interface User", Some("javascript"));
    assert!(!html.contains(&span("keyword", "interface")));
    assert_eq!(highlight_code("type", Some("ts")), span("keyword", "type"));
}

#[test]
fn test_python_class_and_builtins() {
    let code = "class Greeter(Base):\n    \"\"\"Doc.\"\"\"\n    def hi(self):\n        print(len('x'))  # out";
    let html = highlight_code(code, Some("python"));
    assert!(html.contains(&span("keyword", "class")));
    assert!(html.contains(&span("class-name", "Greeter")));
    assert!(html.contains(&span("string", "&quot;&quot;&quot;Doc.&quot;&quot;&quot;")));
    assert!(html.contains(&span("function", "hi")));
    assert!(html.contains(&span("builtin", "print")));
    assert!(html.contains(&span("builtin", "len")));
    assert!(html.contains(&span("string", "&#039;x&#039;")));
    assert!(html.ends_with(&span("comment", "# out")));
    assert!(!html.contains(&span("class-name", "Base")));
}

#[test]
fn test_python_constants_are_keywords() {
    let html = highlight_code("x = None if True else False", Some("py"));
    assert!(html.contains(&span("keyword", "None")));
    assert!(html.contains(&span("keyword", "True")));
    assert!(html.contains(&span("keyword", "False")));
}

#[test]
fn test_language_lookup_ignores_case() {
    let code = "def f():\n    pass";
    let expected = highlight_code(code, Some("python"));
    assert_eq!(highlight_code(code, Some("PYTHON")), expected);
    assert_eq!(highlight_code(code, Some("Py")), expected);
}

#[test]
fn test_java_method() {
    let html = highlight_code(
        "public static void main(String[] args) { System.out.println(\"hi\"); }",
        Some("java"),
    );
    for keyword in ["public", "static", "void"] {
        assert!(html.contains(&span("keyword", keyword)), "{}", keyword);
    }
    assert!(html.contains(&span("function", "main")));
    assert!(html.contains(&span("function", "println")));
    assert!(html.contains(&span("string", "&quot;hi&quot;")));
}

#[test]
fn test_csharp_hex_literal() {
    let html = highlight_code("using System; var x = 0x1F;", Some("C#"));
    assert!(html.contains(&span("keyword", "using")));
    assert!(html.contains(&span("keyword", "var")));
    assert!(html.contains(&span("number", "0x1F")));
}

#[test]
fn test_php_variables() {
    let html = highlight_code("<?php $name = 'x'; echo strlen($name);", Some("php"));
    assert_eq!(html.matches(&span("variable", "$name")).count(), 2);
    assert!(html.contains(&span("keyword", "echo")));
    assert!(html.contains(&span("function", "strlen")));
    assert!(html.starts_with(&span("operator", "&lt;")));
}

#[test]
fn test_bash_script() {
    let html = highlight_code(
        "#!/bin/bash\nfor f in *.txt; do echo \"$f\" ${HOME}; done",
        Some("bash"),
    );
    assert!(html.starts_with(&span("comment", "#!/bin/bash")));
    for keyword in ["for", "in", "do", "echo", "done"] {
        assert!(html.contains(&span("keyword", keyword)), "{}", keyword);
    }
    assert!(html.contains(&span("string", "&quot;$f&quot;")));
    assert!(html.contains(&span("variable", "${HOME}")));
}

#[test]
fn test_sql_keywords_keep_their_case() {
    let html = highlight_code("select name FROM users Where id = 42 -- pick", Some("sql"));
    assert!(html.contains(&span("keyword", "select")));
    assert!(html.contains(&span("keyword", "FROM")));
    assert!(html.contains(&span("keyword", "Where")));
    assert!(html.contains(&span("number", "42")));
    assert!(html.ends_with(&span("comment", "-- pick")));
    assert_eq!(html.matches("token operator").count(), 1);
}
