//! Extraction fallback chain
//!
//! When the primary structured path cannot produce content, a prioritized
//! list of extraction strategies runs against the file. Each strategy is
//! attempted in isolation: an error inside one is logged and treated as
//! that strategy's failure, never aborting the chain. The first strategy
//! whose trimmed output is non-empty wins; its content is never merged
//! with another strategy's.

mod archive;
mod body_text;
mod html;
mod structured;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use zip::ZipArchive;

use crate::error::Result;

pub use archive::ArchiveTextExtractor;
pub use body_text::BodyTextExtractor;
pub use html::HtmlConverter;
pub use structured::StructuredExtractor;

/// A single extraction backend in the fallback chain.
pub trait ExtractionStrategy {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Try to pull text content out of the document at `path`.
    ///
    /// An `Err` or an empty string both count as failure for this strategy.
    fn attempt(&self, path: &Path) -> Result<String>;
}

/// Content recovered by the fallback chain, tagged with its source.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub strategy: &'static str,
    pub content: String,
}

/// The default strategy list, in priority order.
pub fn strategies() -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(HtmlConverter),
        Box::new(ArchiveTextExtractor),
        Box::new(BodyTextExtractor),
        Box::new(StructuredExtractor),
    ]
}

/// Run the default fallback chain against a document.
pub fn extract_content(path: &Path) -> Option<Extraction> {
    run_chain(&strategies(), path)
}

/// Try each strategy in order, returning the first non-empty result.
///
/// Strategies after the winner are never invoked. `None` means total
/// failure; callers must not write any output for it.
pub fn run_chain(strategies: &[Box<dyn ExtractionStrategy>], path: &Path) -> Option<Extraction> {
    for strategy in strategies {
        match strategy.attempt(path) {
            Ok(content) if !content.trim().is_empty() => {
                debug!(
                    "{} extracted {} characters",
                    strategy.name(),
                    content.len()
                );
                return Some(Extraction {
                    strategy: strategy.name(),
                    content,
                });
            }
            Ok(_) => {
                debug!("{} returned no content", strategy.name());
            }
            Err(err) => {
                warn!("{} failed: {err}", strategy.name());
            }
        }
    }

    None
}

/// Read one part of the OPC archive as UTF-8 text.
pub(crate) fn read_archive_part(path: &Path, part_name: &str) -> Result<Option<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let Ok(mut part) = archive.by_name(part_name) else {
        return Ok(None);
    };

    let mut content = String::new();
    part.read_to_string(&mut content)?;
    Ok(Some(content))
}

/// List the part names inside the OPC archive.
pub(crate) fn archive_part_names(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let archive = ZipArchive::new(file)?;
    Ok(archive.file_names().map(|name| name.to_string()).collect())
}

/// Decode the XML entities WordprocessingML text nodes may carry.
pub(crate) fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
