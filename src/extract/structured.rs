//! Structured-object extraction strategy
//!
//! Last in the chain: walk the parsed object model and flatten it to text.
//! Body paragraphs come first, then table cell text, then header and footer
//! paragraphs, covering the document's full textual surface.

use std::path::Path;

use super::body_text::body_paragraphs;
use super::{ExtractionStrategy, archive_part_names, read_archive_part};
use crate::document::{self, DocumentElement};
use crate::error::Result;

pub struct StructuredExtractor;

impl ExtractionStrategy for StructuredExtractor {
    fn name(&self) -> &'static str {
        "structured-objects"
    }

    fn attempt(&self, path: &Path) -> Result<String> {
        let doc = document::load_document(path)?;
        let mut content = Vec::new();

        for element in &doc.elements {
            match element {
                DocumentElement::Paragraph { text, .. } => {
                    content.push(text.clone());
                }
                DocumentElement::Table { rows } => {
                    for row in rows {
                        for cell in row {
                            if !cell.trim().is_empty() {
                                content.push(cell.trim().to_string());
                            }
                        }
                    }
                }
            }
        }

        content.extend(header_footer_text(path)?);

        Ok(content.join("\n\n"))
    }
}

/// Paragraph text from the header and footer parts, in archive order.
fn header_footer_text(path: &Path) -> Result<Vec<String>> {
    let mut section_parts: Vec<String> = archive_part_names(path)?
        .into_iter()
        .filter(|name| {
            (name.starts_with("word/header") || name.starts_with("word/footer"))
                && name.ends_with(".xml")
        })
        .collect();
    // Headers before footers, numbered parts in order
    section_parts.sort();

    let mut text = Vec::new();
    for part_name in section_parts {
        if let Some(xml) = read_archive_part(path, &part_name)? {
            text.extend(body_paragraphs(&xml));
        }
    }

    Ok(text)
}
