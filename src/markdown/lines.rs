//! Line-based Markdown conversion for flat text
//!
//! The fallback extraction strategies produce plain text with no style or
//! font metadata, so classification here runs on the line content alone:
//! all-caps and trailing-colon heading cues plus list-marker normalization.

use super::heading::is_all_caps;
use super::list::{is_list_item, normalize_list_item};

/// Convert flat extracted text to Markdown, one construct per line.
pub fn lines_to_markdown(content: &str) -> String {
    let mut lines = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let short = line.chars().count() < 100;

        if is_all_caps(line) && short {
            lines.push(format!("# {line}"));
        } else if line.ends_with(':') && short {
            lines.push(format!("## {line}"));
        } else if is_list_item(line) {
            lines.push(normalize_list_item(line));
        } else {
            lines.push(line.to_string());
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_heading_cues() {
        let md = lines_to_markdown("PROJECT OVERVIEW\nGoals:\nJust a sentence.");
        assert_eq!(
            md,
            "# PROJECT OVERVIEW\n\n## Goals:\n\nJust a sentence.\n"
        );
    }

    #[test]
    fn test_flat_list_normalization() {
        let md = lines_to_markdown("•  Item one\n2.   Second");
        assert_eq!(md, "- Item one\n\n2. Second\n");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let md = lines_to_markdown("\n\n  \nHello\n\n");
        assert_eq!(md, "Hello\n");
    }
}
