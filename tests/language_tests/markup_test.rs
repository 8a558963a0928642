use hikari::highlight_code;
use pretty_assertions::assert_eq;

use crate::span;

#[test]
fn test_html_tags_and_attributes() {
    let html = highlight_code(
        r#"<div class="box" id='main'><!-- note --></div>"#,
        Some("html"),
    );
    assert_eq!(
        html,
        [
            span("tag", "&lt;div"),
            " ".to_string(),
            span("attr-name", "class"),
            "=".to_string(),
            span("attr-value", "&quot;box&quot;"),
            " ".to_string(),
            span("attr-name", "id"),
            "=".to_string(),
            span("attr-value", "&#039;main&#039;"),
            span("tag", "&gt;"),
            span("comment", "&lt;!-- note --&gt;"),
            span("tag", "&lt;/div"),
            span("tag", "&gt;"),
        ]
        .concat()
    );
}

#[test]
fn test_html_doctype_and_self_closing() {
    let html = highlight_code("<!DOCTYPE html><br/>", Some("HTML"));
    assert_eq!(
        html,
        [
            span("tag", "&lt;!DOCTYPE"),
            " html".to_string(),
            span("tag", "&gt;"),
            span("tag", "&lt;br"),
            span("tag", "/&gt;"),
        ]
        .concat()
    );
}

#[test]
fn test_xml_alias_uses_html_rules() {
    let code = "<note a=\"1\"/>";
    assert_eq!(
        highlight_code(code, Some("xml")),
        highlight_code(code, Some("html"))
    );
}

#[test]
fn test_css_rule() {
    let html = highlight_code("a:hover { color: red !important; }", Some("css"));
    assert_eq!(
        html,
        [
            span("selector", "a:hover"),
            " ".to_string(),
            span("punctuation", "{"),
            " ".to_string(),
            span("property", "color"),
            span("value", ": red !important;"),
            " ".to_string(),
            span("punctuation", "}"),
        ]
        .concat()
    );
}

#[test]
fn test_css_important_outside_value() {
    let html = highlight_code("p { color: red !important }", Some("css"));
    assert!(html.contains(&span("important", "!important")));
    assert!(html.contains(&span("property", "color")));
    assert!(html.starts_with(&span("selector", "p")));
}

#[test]
fn test_css_comment_before_selector() {
    let html = highlight_code("/* reset */\n.box, #id {\n  margin: 0;\n}", Some("css"));
    assert!(html.starts_with(&span("comment", "/* reset */")));
    assert!(html.contains(&span("selector", ".box, #id")));
    assert!(html.contains(&span("value", ": 0;")));
}

#[test]
fn test_json_document() {
    let html = highlight_code(
        r#"{"name": "hikari", "tags": [1, 2.5, true, null]}"#,
        Some("json"),
    );
    assert_eq!(
        html,
        [
            span("punctuation", "{"),
            span("property", "&quot;name&quot;"),
            span("punctuation", ":"),
            " ".to_string(),
            span("string", "&quot;hikari&quot;"),
            span("punctuation", ","),
            " ".to_string(),
            span("property", "&quot;tags&quot;"),
            span("punctuation", ":"),
            " ".to_string(),
            span("punctuation", "["),
            span("number", "1"),
            span("punctuation", ","),
            " ".to_string(),
            span("number", "2.5"),
            span("punctuation", ","),
            " ".to_string(),
            span("boolean", "true"),
            span("punctuation", ","),
            " ".to_string(),
            span("boolean", "null"),
            span("punctuation", "]"),
            span("punctuation", "}"),
        ]
        .concat()
    );
}
