//! Structural classification of document elements into Markdown
//!
//! Each paragraph is classified as a heading, a list item, or prose; tables
//! render as pipe tables. Classification never fails: missing or malformed
//! style metadata simply falls through to the prose branch.

pub(crate) mod heading;
pub(crate) mod lines;
pub(crate) mod list;
pub(crate) mod table;

use crate::document::DocumentElement;

pub use lines::lines_to_markdown;

/// Classify an element sequence into a Markdown document.
///
/// Every emitted construct is followed by one blank line; constructs are
/// never concatenated without separation. The result is deterministic for
/// a given input.
pub fn classify(elements: &[DocumentElement]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for element in elements {
        match element {
            DocumentElement::Paragraph {
                text,
                style_name,
                runs,
            } => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }

                if let Some(level) = heading::detect_heading_level(text, style_name, runs) {
                    lines.push(format!("{} {text}", "#".repeat(level as usize)));
                } else if list::is_list_item(text) {
                    lines.push(list::normalize_list_item(text));
                } else {
                    lines.push(text.to_string());
                }

                lines.push(String::new());
            }
            DocumentElement::Table { rows } => {
                table::render_table(rows, &mut lines);
            }
        }
    }

    lines.join("\n")
}
