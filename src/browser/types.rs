//! Browser descriptor types

use serde::{Deserialize, Serialize};

/// Granularity a raw version string is reduced to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NormalizationLevel {
    /// Keep the version as scraped (e.g., "14.2.1")
    #[default]
    Raw,
    /// Leading component only (e.g., "14")
    Major,
    /// First two components, dropping a ".0" minor (e.g., "14" or "14.2")
    MajorMinorTrimmed,
    /// First two components (e.g., "14.0")
    MajorMinor,
}

/// Static per-browser configuration plus the version derived from the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserDescriptor {
    /// Identifier used by the read API and as the cache key (e.g., "firefox")
    pub id: String,
    /// Human readable name (e.g., "Mozilla Firefox")
    pub name: String,
    /// Suffix of the `Template:Latest_stable_software_release/` page
    #[serde(rename = "wikipedia")]
    pub source: String,
    #[serde(rename = "normalized", default)]
    pub normalization: NormalizationLevel,
    /// Set once the cache has been parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

impl BrowserDescriptor {
    pub fn new(id: &str, name: &str, source: &str, normalization: NormalizationLevel) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            source: source.to_string(),
            normalization,
            latest_version: None,
        }
    }
}
