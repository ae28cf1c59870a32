//! File I/O operations and validation
//!
//! This module handles input validation and the final Markdown write.

use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "docx" {
        return Err(Error::InvalidDocument(format!(
            "expected a .docx file, got .{extension} \
            (docmd only supports Word .docx files, not .doc, .xlsx, .zip, etc.)"
        )));
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::InvalidDocument(
                "this appears to be an Excel file (.xlsx); docmd only supports Word documents"
                    .to_string(),
            ));
        }

        return Err(Error::InvalidDocument(
            "missing word/document.xml; the file may be corrupted or is not a Word document"
                .to_string(),
        ));
    }

    Ok(())
}

/// Write the final Markdown to disk, replacing any existing file.
///
/// The handle is scoped to this call; nothing stays open across the
/// surrounding conversion.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
