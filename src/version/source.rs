//! Source trait for fetching raw release text

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching the raw text that carries a browser's latest release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches every revision snippet published for a locator
    ///
    /// # Arguments
    /// * `locator` - Source-specific page name (e.g., "Firefox" for Wikipedia)
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw snippets in the order the source returned them
    /// * `Err(FetchError)` - If the request or response decoding fails
    async fn fetch_revisions(&self, locator: &str) -> Result<Vec<String>, FetchError>;
}
