//! HTML escaping for serialized output.

/// Escape HTML special characters in text content.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a double-quoted HTML attribute value.
///
/// Only `&` and `"` need escaping inside a double-quoted value, so Stimulus
/// descriptors such as `click->dialog#open` pass through readable.
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check whether a string is usable as an attribute name in serialized HTML.
///
/// Rejects names that could break out of the tag (`>`, `/`, `=`, quotes,
/// whitespace) as well as the empty name.
pub fn is_safe_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<') || c.is_control()
        })
}
