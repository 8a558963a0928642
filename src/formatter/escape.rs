use std::borrow::Cow;

/// Replaces `&`, `<`, `>`, `"` and `'` with HTML entities.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(c),
        }
    }
    Cow::Owned(output)
}

/// Inverse of [`escape_html`] for the five entities it produces.
pub fn unescape_html(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape_html("let x = 1;"), Cow::Borrowed(_)));
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_ampersand_is_not_double_decoded() {
        let original = "&lt; is literal";
        let escaped = escape_html(original);
        assert_eq!(escaped, "&amp;lt; is literal");
        assert_eq!(unescape_html(&escaped), original);
    }
}
