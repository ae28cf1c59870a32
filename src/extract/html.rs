//! HTML-based extraction strategy
//!
//! First choice in the chain: render the document to intermediate HTML,
//! then strip the markup back out. The round trip through HTML flattens
//! run formatting while keeping block boundaries, which is exactly what
//! the line-based Markdown conversion wants.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::ExtractionStrategy;
use crate::document::{self, DocumentElement};
use crate::error::Result;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

pub struct HtmlConverter;

impl ExtractionStrategy for HtmlConverter {
    fn name(&self) -> &'static str {
        "html-converter"
    }

    fn attempt(&self, path: &Path) -> Result<String> {
        let doc = document::load_document(path)?;
        let html = render_html(&doc.elements);
        Ok(strip_markup(&html))
    }
}

/// Emit block-level HTML: headings from style names, paragraphs, tables.
fn render_html(elements: &[DocumentElement]) -> String {
    let mut html = String::new();

    for element in elements {
        match element {
            DocumentElement::Paragraph {
                text, style_name, ..
            } => {
                let style = style_name.to_lowercase();
                let level = style
                    .find("heading")
                    .and_then(|pos| {
                        style[pos + "heading".len()..]
                            .chars()
                            .find_map(|c| c.to_digit(10))
                    })
                    .filter(|level| (1..=6).contains(level));

                match level {
                    Some(level) => html.push_str(&format!("<h{level}>{text}</h{level}>\n")),
                    None => html.push_str(&format!("<p>{text}</p>\n")),
                }
            }
            DocumentElement::Table { rows } => {
                html.push_str("<table>\n");
                for row in rows {
                    html.push_str("<tr>\n");
                    for cell in row {
                        html.push_str(&format!("<td>{cell}</td>\n"));
                    }
                    html.push_str("</tr>\n");
                }
                html.push_str("</table>\n");
            }
        }
    }

    html
}

/// Remove markup tags, then collapse runs of blank lines to one.
fn strip_markup(html: &str) -> String {
    let text = MARKUP_TAG.replace_all(html, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
