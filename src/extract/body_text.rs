//! Specialized plain-text extraction strategy
//!
//! Third choice in the chain: read only `word/document.xml` and collect the
//! `<w:t>` text runs, breaking paragraphs at `</w:p>`. Narrower than the
//! generic archive pass but produces cleaner paragraph structure.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtractionStrategy, decode_entities, read_archive_part};
use crate::error::{Error, Result};

static TEXT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap());

pub struct BodyTextExtractor;

impl ExtractionStrategy for BodyTextExtractor {
    fn name(&self) -> &'static str {
        "body-text"
    }

    fn attempt(&self, path: &Path) -> Result<String> {
        let xml = read_archive_part(path, "word/document.xml")?.ok_or_else(|| {
            Error::InvalidDocument("missing word/document.xml".to_string())
        })?;

        Ok(body_paragraphs(&xml).join("\n\n"))
    }
}

/// Collect paragraph text from WordprocessingML markup.
pub(crate) fn body_paragraphs(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for chunk in xml.split("</w:p>") {
        let text: String = TEXT_RUN
            .captures_iter(chunk)
            .map(|caps| caps[1].to_string())
            .collect();
        let text = text.trim().to_string();
        if !text.is_empty() {
            paragraphs.push(decode_entities(&text));
        }
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_merge_within_paragraph() {
        let xml = "<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t>lo</w:t></w:r></w:p>\
                   <w:p><w:r><w:t>World</w:t></w:r></w:p>";
        assert_eq!(body_paragraphs(xml), vec!["Hello", "World"]);
    }

    #[test]
    fn test_preserved_space_attribute() {
        let xml = r#"<w:p><w:r><w:t xml:space="preserve">a b</w:t></w:r></w:p>"#;
        assert_eq!(body_paragraphs(xml), vec!["a b"]);
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        let xml = "<w:p></w:p><w:p><w:r><w:t>x</w:t></w:r></w:p>";
        assert_eq!(body_paragraphs(xml), vec!["x"]);
    }
}
