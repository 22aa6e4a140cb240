/// Escape the five HTML-special characters, ampersand first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_quotes_for_attribute_contexts() {
        assert_eq!(escape_html("it's"), "it&#039;s");
        assert_eq!(escape_html(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn ampersands_are_not_double_escaped() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escape_html("汝城话 ru2"), "汝城话 ru2");
    }
}
