//! Document parsing and data structures module
//!
//! This module provides functionality for parsing Microsoft Word (.docx)
//! documents into a structured element sequence for classification.

pub(crate) mod io;
pub(crate) mod loader;
pub mod models;

// Re-export all models and the loader entry point
pub use loader::load_document;
pub use models::*;
