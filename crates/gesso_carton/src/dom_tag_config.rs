//! Static HTML tag tables.
//!
//! All lookups are case-insensitive on ASCII tag names; callers may pass the
//! tag exactly as it was written in the source.

use phf::phf_set;

/// Elements that never have content or a closing tag.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
};

/// Elements whose content is opaque text up to the matching close tag.
static RAW_TEXT_TAGS: phf::Set<&'static str> = phf_set! {
    "script", "style", "textarea", "title",
};

/// `<input type=...>` values that render as a native button.
static BUTTON_INPUT_TYPES: phf::Set<&'static str> = phf_set! {
    "button", "submit", "reset", "image",
};

fn lowercase(tag: &str) -> compact_str::CompactString {
    tag.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Check if a tag is a void element (`<br>`, `<img>`, ...).
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag) || VOID_TAGS.contains(lowercase(tag).as_str())
}

/// Check if a tag holds raw text (`<script>`, `<style>`, ...).
#[inline]
pub fn is_raw_text_tag(tag: &str) -> bool {
    RAW_TEXT_TAGS.contains(tag) || RAW_TEXT_TAGS.contains(lowercase(tag).as_str())
}

/// The ARIA role an element carries without any `role` attribute.
///
/// Only the interactive roles relevant to attribute rewriting are reported;
/// everything else returns `None`.
pub fn implicit_role(tag: &str, has_href: bool, input_type: Option<&str>) -> Option<&'static str> {
    match lowercase(tag).as_str() {
        "button" | "summary" => Some("button"),
        "a" | "area" if has_href => Some("link"),
        "input" => {
            let ty = input_type.map(lowercase)?;
            BUTTON_INPUT_TYPES.contains(ty.as_str()).then_some("button")
        }
        _ => None,
    }
}

/// Whether a native role already covers a synthetic `role="button"`.
///
/// Links are accepted as well: an `<a href>` styled as a button still gets
/// keyboard activation and focus from the browser.
#[inline]
pub fn covers_button_role(native_role: &str) -> bool {
    matches!(native_role, "button" | "link")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("IMG"));
        assert!(!is_void_tag("div"));
    }

    #[test]
    fn test_raw_text_tags() {
        assert!(is_raw_text_tag("script"));
        assert!(is_raw_text_tag("Textarea"));
        assert!(!is_raw_text_tag("pre"));
    }

    #[test]
    fn test_implicit_role() {
        assert_eq!(implicit_role("button", false, None), Some("button"));
        assert_eq!(implicit_role("A", true, None), Some("link"));
        assert_eq!(implicit_role("a", false, None), None);
        assert_eq!(implicit_role("input", false, Some("Submit")), Some("button"));
        assert_eq!(implicit_role("input", false, Some("text")), None);
        assert_eq!(implicit_role("input", false, None), None);
        assert_eq!(implicit_role("div", true, None), None);
    }

    #[test]
    fn test_covers_button_role() {
        assert!(covers_button_role("button"));
        assert!(covers_button_role("link"));
        assert!(!covers_button_role("checkbox"));
    }
}
