//! Escaping for SBOM-originated text embedded in exported documents.
//!
//! Component names, versions, titles and descriptions come from untrusted
//! input and must never reach the document unescaped.

/// Escapes text for HTML/SVG element content
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escapes text for a quoted attribute value.
///
/// Stricter than [`escape_html`]: whitespace that would break attribute
/// parsing is encoded too.
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push_str(&escape_html(c.encode_utf8(&mut [0; 4]))),
        }
    }
    result
}
