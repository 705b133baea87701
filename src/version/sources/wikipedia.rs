//! Wikipedia (MediaWiki query API) source implementation

use std::time::Duration;

use indexmap::IndexMap;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use crate::config::{DEFAULT_API_URL, USER_AGENT};
use crate::logging::Logger;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;

/// Template namespace holding the per-product release infobox data
const TEMPLATE_PREFIX: &str = "Template:Latest_stable_software_release/";

/// Response from the MediaWiki query API
#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Query,
}

#[derive(Debug, Deserialize)]
struct Query {
    /// Keyed by page id; insertion order follows the response body
    pages: IndexMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    /// Missing for pages that do not exist
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    #[serde(rename = "*")]
    content: String,
}

impl QueryResponse {
    /// Flattens every revision of every page into one list
    fn into_contents(self) -> Vec<String> {
        self.query
            .pages
            .into_values()
            .flat_map(|page| page.revisions.into_iter().map(|r| r.content))
            .collect()
    }
}

/// Source implementation reading release templates through the MediaWiki API
pub struct WikipediaSource {
    client: Client,
    base_url: String,
    logger: Logger,
}

impl WikipediaSource {
    /// Creates a new WikipediaSource with a custom base URL
    ///
    /// `timeout` of `None` keeps the HTTP client's default behavior.
    pub fn new(base_url: &str, timeout: Option<Duration>, logger: Logger) -> Self {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().unwrap_or_else(|e| {
            logger.warn(&format!("Failed to build HTTP client, using defaults: {}", e));
            Client::new()
        });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            logger,
        }
    }

    /// Builds the query URL for a release template
    fn query_url(&self, locator: &str) -> Result<Url, FetchError> {
        let title = format!("{}{}", TEMPLATE_PREFIX, locator);
        Url::parse_with_params(
            &format!("{}/w/api.php", self.base_url),
            [
                ("action", "query"),
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("format", "json"),
                ("titles", title.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }
}

impl Default for WikipediaSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None, Logger::default())
    }
}

#[async_trait::async_trait]
impl VersionSource for WikipediaSource {
    async fn fetch_revisions(&self, locator: &str) -> Result<Vec<String>, FetchError> {
        let url = self.query_url(locator)?;
        self.logger
            .debug(&format!("Fetching release template: {}", url));

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            self.logger
                .warn(&format!("Wikipedia returned status {} for {}", status, locator));
            return Err(FetchError::Status(status));
        }

        let body: QueryResponse = response.json().await.map_err(|e| {
            self.logger.warn(&format!(
                "Failed to parse Wikipedia response for {}: {}",
                locator, e
            ));
            FetchError::InvalidResponse(e.to_string())
        })?;

        Ok(body.into_contents())
    }
}
