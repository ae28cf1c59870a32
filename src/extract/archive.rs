//! Generic archive text extraction strategy
//!
//! Second choice in the chain: treat the document as a plain OPC archive
//! and strip XML tags from every `word/*.xml` part. No object model, no
//! styles; it recovers text from documents the structured parser chokes on.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtractionStrategy, archive_part_names, decode_entities, read_archive_part};
use crate::error::Result;

static XML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

pub struct ArchiveTextExtractor;

impl ExtractionStrategy for ArchiveTextExtractor {
    fn name(&self) -> &'static str {
        "archive-text"
    }

    fn attempt(&self, path: &Path) -> Result<String> {
        let mut sections = Vec::new();

        for part_name in archive_part_names(path)? {
            if !part_name.starts_with("word/") || !part_name.ends_with(".xml") {
                continue;
            }

            if let Some(xml) = read_archive_part(path, &part_name)? {
                let text = strip_xml(&xml);
                if !text.is_empty() {
                    sections.push(text);
                }
            }
        }

        Ok(sections.join("\n\n"))
    }
}

/// Drop tags, keeping paragraph and cell boundaries as line breaks.
fn strip_xml(xml: &str) -> String {
    let xml = xml.replace("</w:p>", "</w:p>\n").replace("</w:tc>", "</w:tc>\n");
    let text = XML_TAG.replace_all(&xml, "");
    let text = BLANK_RUN.replace_all(&text, "\n");
    decode_entities(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_xml_keeps_paragraph_breaks() {
        let xml = r#"<w:p><w:r><w:t>First</w:t></w:r></w:p><w:p><w:r><w:t>Second</w:t></w:r></w:p>"#;
        assert_eq!(strip_xml(xml), "First\nSecond");
    }

    #[test]
    fn test_strip_xml_decodes_entities() {
        let xml = "<w:p><w:r><w:t>Fish &amp; Chips</w:t></w:r></w:p>";
        assert_eq!(strip_xml(xml), "Fish & Chips");
    }

    #[test]
    fn test_tag_only_part_is_empty() {
        let xml = r#"<?xml version="1.0"?><w:styles><w:style w:styleId="Heading1"/></w:styles>"#;
        assert_eq!(strip_xml(xml), "");
    }
}
