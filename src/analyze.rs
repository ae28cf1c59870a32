//! Document structure analysis
//!
//! Read-only inspection of a parsed document: element counts, the styles in
//! use, table shapes, and a heading outline. Useful for understanding why a
//! document converts the way it does.

use serde::Serialize;

use crate::document::{Document, DocumentElement};
use crate::markdown::heading::detect_heading_level;

/// Structure report for a parsed document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub paragraph_count: usize,
    pub table_count: usize,
    pub word_count: usize,
    /// Distinct paragraph style names, in order of first appearance.
    pub styles: Vec<String>,
    pub tables: Vec<TableShape>,
    pub outline: Vec<OutlineItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlineItem {
    pub level: u8,
    pub title: String,
}

/// Analyze a document's structure.
pub fn analyze_document(doc: &Document) -> DocumentReport {
    let mut styles: Vec<String> = Vec::new();
    let mut tables = Vec::new();
    let mut outline = Vec::new();
    let mut paragraph_count = 0;
    let mut table_count = 0;

    for element in &doc.elements {
        match element {
            DocumentElement::Paragraph {
                text,
                style_name,
                runs,
            } => {
                paragraph_count += 1;

                if !style_name.is_empty() && !styles.iter().any(|s| s == style_name) {
                    styles.push(style_name.clone());
                }

                if let Some(level) = detect_heading_level(text.trim(), style_name, runs) {
                    outline.push(OutlineItem {
                        level,
                        title: text.trim().to_string(),
                    });
                }
            }
            DocumentElement::Table { rows } => {
                table_count += 1;
                tables.push(TableShape {
                    rows: rows.len(),
                    columns: rows.first().map(Vec::len).unwrap_or(0),
                });
            }
        }
    }

    DocumentReport {
        paragraph_count,
        table_count,
        word_count: doc.metadata.word_count,
        styles,
        tables,
        outline,
    }
}

impl DocumentReport {
    /// Plain-text rendering of the report for terminal output.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "paragraphs: {}\ntables: {}\nwords: {}\n",
            self.paragraph_count, self.table_count, self.word_count
        ));

        if !self.styles.is_empty() {
            out.push_str(&format!("styles: {}\n", self.styles.join(", ")));
        }

        for (i, shape) in self.tables.iter().enumerate() {
            out.push_str(&format!(
                "table {}: {} rows x {} columns\n",
                i + 1,
                shape.rows,
                shape.columns
            ));
        }

        if !self.outline.is_empty() {
            out.push_str("outline:\n");
            for item in &self.outline {
                out.push_str(&format!(
                    "{}{} {}\n",
                    "  ".repeat(item.level.saturating_sub(1) as usize),
                    "#".repeat(item.level as usize),
                    item.title
                ));
            }
        }

        out
    }
}
