//! Heading detection and classification
//!
//! Heading level is decided by an ordered list of independent rules so the
//! tie-break order stays explicit: style name beats font size, font size
//! beats the all-caps and trailing-colon heuristics. Documents routinely
//! trigger several signals at once, so the order matters.

use crate::document::Run;

/// A single heading rule: (text, style name, runs) -> level.
type HeadingRule = fn(&str, &str, &[Run]) -> Option<u8>;

/// Rules in priority order. The first match wins.
const HEADING_RULES: [HeadingRule; 4] = [
    style_name_level,
    font_size_level,
    all_caps_level,
    trailing_colon_level,
];

/// Detect the heading level of a paragraph, if any.
///
/// `text` is expected to be trimmed. Absence of a signal is a valid result;
/// the paragraph then falls through to list/prose classification.
pub(crate) fn detect_heading_level(text: &str, style_name: &str, runs: &[Run]) -> Option<u8> {
    HEADING_RULES
        .iter()
        .find_map(|rule| rule(text, style_name, runs))
}

/// Style-based detection: "Heading 2", "heading2", "Title", etc.
fn style_name_level(_text: &str, style_name: &str, _runs: &[Run]) -> Option<u8> {
    let style = style_name.to_lowercase();

    if let Some(pos) = style.find("heading") {
        // Word style ids ("Heading2") and style names ("heading 2") both
        // carry the level as the first digit after the word
        let level = style[pos + "heading".len()..]
            .chars()
            .find_map(|c| c.to_digit(10));
        return match level {
            Some(level @ 1..=6) => Some(level as u8),
            // "Heading" with no usable digit still marks a heading
            _ => Some(1),
        };
    }

    if style.contains("title") {
        return Some(1);
    }

    None
}

/// Font-size tiers: >18pt, >16pt, >14pt map to levels 1-3.
fn font_size_level(_text: &str, _style_name: &str, runs: &[Run]) -> Option<u8> {
    let max_size = runs
        .iter()
        .filter_map(|run| run.font_size_pt)
        .fold(None, |acc: Option<f32>, size| {
            Some(acc.map_or(size, |a| a.max(size)))
        })?;

    if max_size > 18.0 {
        Some(1)
    } else if max_size > 16.0 {
        Some(2)
    } else if max_size > 14.0 {
        Some(3)
    } else {
        None
    }
}

/// All-caps text reads as a shouted section title.
fn all_caps_level(text: &str, _style_name: &str, _runs: &[Run]) -> Option<u8> {
    if is_all_caps(text) { Some(1) } else { None }
}

/// Short label text ending in a colon reads as a subheading.
fn trailing_colon_level(text: &str, _style_name: &str, _runs: &[Run]) -> Option<u8> {
    if text.chars().count() < 100 && text.ends_with(':') {
        Some(2)
    } else {
        None
    }
}

/// True when the text has at least one cased letter and none lowercase.
pub(crate) fn is_all_caps(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
