//! HTML entity escaping for literal text.

/// Escapes HTML special characters in literal text.
///
/// Converts `&`, `<`, `>`, `"`, and `'` to their entity forms so the text
/// cannot be interpreted as markup when inserted into an HTML document.
/// Single pass, not idempotent: escaping already-escaped text escapes the
/// `&` of each entity again.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
