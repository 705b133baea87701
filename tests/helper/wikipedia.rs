//! Wikipedia API test utilities

use std::path::Path;
use std::sync::Arc;

use mockito::{Matcher, Mock, ServerGuard};

use browse_happy::browser::{BrowserDescriptor, NormalizationLevel};
use browse_happy::logging::Logger;
use browse_happy::tracker::BrowserTracker;
use browse_happy::version::cache::CacheStore;
use browse_happy::version::sources::WikipediaSource;

/// Browsers used across the end-to-end tests
pub fn test_browsers() -> Vec<BrowserDescriptor> {
    vec![
        BrowserDescriptor::new("chrome", "Google Chrome", "Google_Chrome", NormalizationLevel::Major),
        BrowserDescriptor::new("firefox", "Mozilla Firefox", "Firefox", NormalizationLevel::Major),
        BrowserDescriptor::new("safari", "Safari", "Safari", NormalizationLevel::MajorMinorTrimmed),
    ]
}

/// MediaWiki query response carrying one revision of a release template
pub fn release_body(version: &str) -> String {
    serde_json::json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "4242": {
                    "pageid": 4242,
                    "ns": 10,
                    "revisions": [{
                        "contentformat": "text/x-wiki",
                        "contentmodel": "wikitext",
                        "*": format!(
                            "{{{{Infobox software/simple\n| latest release version = {}\n| latest release date = {{{{Start date and age|2024|10|14}}}}\n}}}}",
                            version
                        )
                    }]
                }
            }
        }
    })
    .to_string()
}

/// Registers a release template response for `locator`, expected `hits` times
pub async fn mock_release(
    server: &mut ServerGuard,
    locator: &str,
    status: usize,
    body: String,
    hits: usize,
) -> Mock {
    server
        .mock("GET", "/w/api.php")
        .match_query(Matcher::UrlEncoded(
            "titles".into(),
            format!("Template:Latest_stable_software_release/{}", locator),
        ))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

/// Creates a tracker that talks to the mock server and caches at `cache_path`
pub fn create_tracker(server: &ServerGuard, cache_path: &Path) -> BrowserTracker {
    let logger = Logger::default();
    let source = WikipediaSource::new(&server.url(), None, logger.clone());
    let store = CacheStore::new(cache_path, logger);
    BrowserTracker::new(test_browsers(), store, Arc::new(source))
}
