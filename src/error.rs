//! Error types for document conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The file is not a readable .docx document.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A parsing backend failed on the document.
    #[error("document parsing error: {0}")]
    Parse(String),

    /// I/O error when reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::InvalidDocument(other.to_string()),
        }
    }
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputNotFound(PathBuf::from("report.docx"));
        assert_eq!(err.to_string(), "input file not found: report.docx");

        let err = Error::InvalidDocument("missing word/document.xml".to_string());
        assert_eq!(err.to_string(), "invalid document: missing word/document.xml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
