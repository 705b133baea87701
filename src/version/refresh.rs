//! Refresh logic for the release text cache

use chrono::NaiveDate;
use futures::StreamExt;
use futures::stream::FuturesUnordered;

use crate::browser::BrowserDescriptor;
use crate::logging::Logger;
use crate::version::cache::{Cache, CacheStore};
use crate::version::error::RefreshError;
use crate::version::source::VersionSource;

/// What a refresh call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The cache was already fetched today; no request was made
    Current,
    /// Every browser was fetched; `saved` tells whether the file write succeeded
    Refreshed { saved: bool },
}

/// Refresh the cache unless it was already fetched on `today`.
///
/// One request per browser is started before any response is awaited.
/// Responses are applied as they arrive, each replacing that browser's
/// entry. The first failure to arrive ends the refresh: requests still in
/// flight are dropped and the fetch date is left alone. Once every fetch
/// has succeeded the date is set to `today` and the cache is saved.
pub async fn refresh_cache(
    cache: &mut Cache,
    store: &CacheStore,
    source: &dyn VersionSource,
    browsers: &[BrowserDescriptor],
    force_refresh: bool,
    today: NaiveDate,
    logger: &Logger,
) -> Result<RefreshOutcome, RefreshError> {
    if !force_refresh && cache.is_current(today) {
        logger.debug("cache is current");
        return Ok(RefreshOutcome::Current);
    }

    let mut pending: FuturesUnordered<_> = browsers
        .iter()
        .map(|browser| async move {
            let result = source.fetch_revisions(&browser.source).await;
            match &result {
                Ok(_) => logger.debug(&format!("cache request {} - OK", browser.id)),
                Err(e) => logger.warn(&format!("cache request {} - {}", browser.id, e)),
            }
            (browser, result)
        })
        .collect();

    while let Some((browser, result)) = pending.next().await {
        match result {
            Ok(contents) => cache.set_entry(&browser.id, contents),
            Err(source) => {
                return Err(RefreshError::Fetch {
                    id: browser.id.clone(),
                    source,
                });
            }
        }
    }

    cache.fetched = Some(today);
    logger.info("cache was refreshed");

    let saved = store.save(cache);
    Ok(RefreshOutcome::Refreshed { saved })
}
