//! Derive each browser's latest version from the cached source text

use crate::browser::BrowserDescriptor;
use crate::version::cache::Cache;
use crate::version::error::ParseError;
use crate::version::extractor::VersionExtractor;
use crate::version::normalize::normalize_version;

/// Find the normalized latest version of one browser.
///
/// When several snippets carry a version, the last one wins.
pub fn parse_browser(
    browser: &BrowserDescriptor,
    snippets: &[String],
    extractor: &dyn VersionExtractor,
) -> Result<String, ParseError> {
    let raw = snippets
        .iter()
        .rev()
        .find_map(|snippet| extractor.extract(snippet))
        .ok_or_else(|| ParseError::NoMatch {
            id: browser.id.clone(),
        })?;

    normalize_version(&raw, browser.normalization).ok_or_else(|| ParseError::Normalize {
        id: browser.id.clone(),
        version: raw,
    })
}

/// Set `latest_version` on every browser from the cache.
///
/// Stops at the first browser whose text cannot be parsed; browsers before
/// it keep their newly derived version.
pub fn parse_cache(
    cache: &Cache,
    browsers: &mut [BrowserDescriptor],
    extractor: &dyn VersionExtractor,
) -> Result<(), ParseError> {
    for browser in browsers.iter_mut() {
        let snippets = cache.entry(&browser.id).unwrap_or_default();
        let version = parse_browser(browser, snippets, extractor)?;
        browser.latest_version = Some(version);
    }
    Ok(())
}
