//! List item detection and marker normalization
//!
//! Bullet glyphs collapse to `- `; numbered markers keep their number but
//! get exactly one space after the dot.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-*]\s*").unwrap());
static NUMBERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s*").unwrap());

/// True when the trimmed text starts with a bullet glyph, dash, asterisk,
/// or "digit+period" marker.
pub(crate) fn is_list_item(text: &str) -> bool {
    BULLET_MARKER.is_match(text) || NUMBERED_MARKER.is_match(text)
}

/// Rewrite the list marker into canonical Markdown form.
///
/// Text without a recognized marker passes through unchanged.
pub(crate) fn normalize_list_item(text: &str) -> String {
    if let Some(caps) = NUMBERED_MARKER.captures(text) {
        let number = &caps[1];
        let rest = &text[caps[0].len()..];
        return format!("{number}. {rest}");
    }

    if let Some(marker) = BULLET_MARKER.find(text) {
        let rest = &text[marker.end()..];
        return format!("- {rest}");
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_glyphs_collapse() {
        assert_eq!(normalize_list_item("•  Item one"), "- Item one");
        assert_eq!(normalize_list_item("- Item two"), "- Item two");
        assert_eq!(normalize_list_item("* Item three"), "- Item three");
    }

    #[test]
    fn test_numbered_marker_spacing() {
        assert_eq!(normalize_list_item("2.   Second"), "2. Second");
        assert_eq!(normalize_list_item("10.First"), "10. First");
    }

    #[test]
    fn test_detection() {
        assert!(is_list_item("• milk"));
        assert!(is_list_item("3. eggs"));
        assert!(!is_list_item("plain prose"));
        assert!(!is_list_item("3 eggs"));
    }
}
