//! Core data structures for document representation
//!
//! This module defines the public types used to represent a parsed document:
//! the element sequence handed to the Markdown classifier plus file-level
//! metadata.

use serde::{Deserialize, Serialize};

/// A parsed document: element sequence in reading order plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub elements: Vec<DocumentElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub table_count: usize,
}

/// A single structural element in reading order.
///
/// Paragraphs keep their Word style name and per-run font sizes so the
/// classifier can weigh style against formatting; tables are reduced to
/// their cell text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DocumentElement {
    Paragraph {
        text: String,
        style_name: String,
        runs: Vec<Run>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
}

/// A contiguous span of uniformly formatted text within a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub font_size_pt: Option<f32>,
}

impl DocumentElement {
    /// Plain text content of the element, used for word counting and search.
    pub fn text_content(&self) -> String {
        match self {
            DocumentElement::Paragraph { text, .. } => text.clone(),
            DocumentElement::Table { rows } => rows
                .iter()
                .flat_map(|row| row.iter())
                .map(|cell| cell.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
