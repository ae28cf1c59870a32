//! Conversion pipeline
//!
//! Orchestrates one document conversion start to finish: structured load
//! and classification first, the extraction fallback chain when that
//! produces nothing, then a single scoped write of the result.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::document::{self, io::write_output};
use crate::error::{Error, Result};
use crate::extract;
use crate::markdown;

/// Where the converted content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Primary path: structured element classification.
    Structured,
    /// Named fallback strategy from the extraction chain.
    Fallback(&'static str),
}

/// Summary of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub source: ContentSource,
}

/// Convert a .docx file to a Markdown file.
///
/// With no explicit `output`, the result lands next to the input as
/// `<input-stem>.md`, overwriting unconditionally. Returns `Ok(None)` when
/// neither the structured path nor any fallback strategy yields content;
/// no file is created or modified in that case.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<Option<Conversion>> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let Some((content, source)) = convert_to_markdown(input) else {
        return Ok(None);
    };

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    write_output(&output_path, &content)?;

    info!(
        "converted {} -> {} ({} bytes)",
        input.display(),
        output_path.display(),
        content.len()
    );

    Ok(Some(Conversion {
        output_path,
        bytes_written: content.len(),
        source,
    }))
}

/// Produce the Markdown text for a document without touching the filesystem
/// output side.
pub fn convert_to_markdown(input: &Path) -> Option<(String, ContentSource)> {
    // Primary: structured elements through the full classifier
    match document::load_document(input) {
        Ok(doc) => {
            let content = markdown::classify(&doc.elements);
            if !content.trim().is_empty() {
                return Some((content, ContentSource::Structured));
            }
            warn!("structured load of {} produced no content", input.display());
        }
        Err(err) => {
            warn!("structured load of {} failed: {err}", input.display());
        }
    }

    // Fallback: flat text through the line-based conversion
    let extraction = extract::extract_content(input)?;
    let content = markdown::lines_to_markdown(&extraction.content);
    if content.trim().is_empty() {
        return None;
    }

    Some((content, ContentSource::Fallback(extraction.strategy)))
}

/// Default output path: `<input-stem>.md` beside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/tmp/report.docx")),
            Path::new("/tmp/report.md")
        );
    }

    #[test]
    fn test_missing_input_is_terminal() {
        let err = convert_file(Path::new("/nonexistent/file.docx"), None).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }
}
