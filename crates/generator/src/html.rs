/// HTML-escape a string for element text and attribute values
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_plain_text() {
        assert_eq!(html_escape("Omnyo"), "Omnyo");
        assert_eq!(html_escape("Τιμές"), "Τιμές");
    }

    #[test]
    fn test_html_escape_markup() {
        assert_eq!(
            html_escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_html_escape_attribute_breakout() {
        assert_eq!(
            html_escape(r#"" onload="evil()"#),
            "&quot; onload=&quot;evil()"
        );
        assert_eq!(html_escape("Fish & Chips"), "Fish &amp; Chips");
    }
}
