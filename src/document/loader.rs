//! Document loading
//!
//! This module contains the `load_document()` function that turns a DOCX
//! file into our internal element sequence, preserving the style names and
//! run-level font sizes the Markdown classifier relies on.

use std::path::Path;

use super::io::validate_docx_file;
use super::models::*;
use crate::error::Result;

/// Load a .docx file into a structured [`Document`].
///
/// Elements come out in reading order. Paragraphs with no text are dropped
/// here; they carry no Markdown output.
pub fn load_document(file_path: &Path) -> Result<Document> {
    // Validate file type before attempting to parse
    validate_docx_file(file_path)?;

    let file_size = std::fs::metadata(file_path)?.len();
    let file_data = std::fs::read(file_path)?;
    let docx = docx_rs::read_docx(&file_data)?;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let mut elements = Vec::new();
    let mut word_count = 0;

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                let style_name = para
                    .property
                    .style
                    .as_ref()
                    .map(|style| style.val.clone())
                    .unwrap_or_default();

                let runs = extract_runs(para);
                let text: String = runs.iter().map(|run| run.text.as_str()).collect();
                let text = text.trim().to_string();

                if !text.is_empty() {
                    word_count += text.split_whitespace().count();
                    elements.push(DocumentElement::Paragraph {
                        text,
                        style_name,
                        runs,
                    });
                }
            }
            docx_rs::DocumentChild::Table(table) => {
                let rows = extract_table_rows(table);
                if !rows.is_empty() {
                    elements.push(DocumentElement::Table { rows });
                }
            }
            _ => {
                // Section properties, bookmarks, etc. carry no content
            }
        }
    }

    let paragraph_count = elements
        .iter()
        .filter(|e| matches!(e, DocumentElement::Paragraph { .. }))
        .count();
    let table_count = elements
        .iter()
        .filter(|e| matches!(e, DocumentElement::Table { .. }))
        .count();

    let metadata = DocumentMetadata {
        file_path: file_path.to_string_lossy().to_string(),
        file_size,
        word_count,
        paragraph_count,
        table_count,
    };

    Ok(Document {
        title,
        metadata,
        elements,
    })
}

/// Extract runs with their font sizes from a paragraph.
fn extract_runs(para: &docx_rs::Paragraph) -> Vec<Run> {
    let mut runs = Vec::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                push_run(run, &mut runs);
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Accepted track-change insertions still count as content
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        push_run(run, &mut runs);
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }

    runs
}

fn push_run(run: &docx_rs::Run, runs: &mut Vec<Run>) {
    let text = extract_run_text(run);
    if !text.is_empty() {
        runs.push(Run {
            text,
            font_size_pt: extract_font_size_pt(run),
        });
    }
}

/// Extract text from a run using docx-rs features
fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Extract the run's font size in points, if one is set.
fn extract_font_size_pt(run: &docx_rs::Run) -> Option<f32> {
    let sz = run.run_property.sz.as_ref()?;

    // The size value is private in the current API; recover it from the
    // Debug form. Word stores sizes in half-points.
    let sz_debug = format!("{sz:?}");
    let digits: String = sz_debug.chars().filter(|c| c.is_ascii_digit()).collect();
    let half_points: f32 = digits.parse().ok()?;

    Some(half_points / 2.0)
}

/// Reduce a docx-rs table to rows of trimmed cell text.
fn extract_table_rows(table: &docx_rs::Table) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let mut cell_text = String::new();

            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => {
                        for para_child in &para.children {
                            if let docx_rs::ParagraphChild::Run(run) = para_child {
                                for run_child in &run.children {
                                    if let docx_rs::RunChild::Text(text_elem) = run_child {
                                        if !cell_text.is_empty() && !cell_text.ends_with(' ') {
                                            cell_text.push(' ');
                                        }
                                        cell_text.push_str(&text_elem.text);
                                    }
                                }
                            }
                        }
                    }
                    _ => {
                        // Nested tables are out of scope
                    }
                }
            }

            cells.push(cell_text.trim().to_string());
        }

        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    rows
}
