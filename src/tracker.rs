//! Browser version tracker
//!
//! [`BrowserTracker`] owns the browser list and runs the one-shot
//! initialization pipeline:
//!
//! ```text
//! Uninitialized ─▶ LoadingCache ─▶ Refreshing ─▶ Parsing ─▶ Ready
//! ```
//!
//! Readiness is published only when every stage succeeds. A failed stage
//! leaves the tracker in that stage, so [`BrowserTracker::ready`] keeps
//! waiting; the error itself is returned from [`BrowserTracker::init`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tokio::sync::watch;

use crate::browser::{self, BrowserDescriptor, CatalogError};
use crate::config::Config;
use crate::logging::Logger;
use crate::version::cache::CacheStore;
use crate::version::error::{ParseError, RefreshError};
use crate::version::extractor::{VersionExtractor, WikitextExtractor};
use crate::version::parse::parse_cache;
use crate::version::refresh::refresh_cache;
use crate::version::source::VersionSource;
use crate::version::sources::WikipediaSource;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Refresh(#[from] RefreshError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Unknown browser: {0}")]
    UnknownBrowser(String),

    #[error("Tracker was already initialized")]
    AlreadyInitialized,
}

/// Initialization stage of a tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    LoadingCache,
    Refreshing,
    Parsing,
    Ready,
}

/// Handle for awaiting readiness from another task
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<InitState>,
}

impl ReadySignal {
    /// Waits until the tracker is ready.
    ///
    /// Returns `false` if the tracker was dropped before becoming ready.
    pub async fn wait(&mut self) -> bool {
        self.rx
            .wait_for(|state| *state == InitState::Ready)
            .await
            .is_ok()
    }
}

pub struct BrowserTracker {
    browsers: RwLock<Vec<BrowserDescriptor>>,
    store: CacheStore,
    source: Arc<dyn VersionSource>,
    extractor: Arc<dyn VersionExtractor>,
    force_refresh: bool,
    state: watch::Sender<InitState>,
    logger: Logger,
}

impl BrowserTracker {
    /// Creates a tracker over `browsers`, caching at the store's path
    pub fn new(
        browsers: Vec<BrowserDescriptor>,
        store: CacheStore,
        source: Arc<dyn VersionSource>,
    ) -> Self {
        let (state, _) = watch::channel(InitState::Uninitialized);
        let logger = store.logger().clone();
        Self {
            browsers: RwLock::new(browsers),
            store,
            source,
            extractor: Arc::new(WikitextExtractor::new()),
            force_refresh: false,
            state,
            logger,
        }
    }

    /// Creates a tracker from configuration, using the Wikipedia source
    pub fn from_config(config: &Config) -> Result<Self, TrackerError> {
        let browsers = match &config.browsers_file {
            Some(path) => browser::from_file(path)?,
            None => browser::bundled(),
        };
        let logger = Logger::default();
        let source = WikipediaSource::new(&config.api_url, config.fetch_timeout(), logger.clone());
        let store = CacheStore::new(&config.cache_path(), logger);

        Ok(Self::new(browsers, store, Arc::new(source)))
    }

    /// Replaces the strategy used to find versions in the cached text
    pub fn with_extractor(mut self, extractor: Arc<dyn VersionExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Always fetch during [`init`](Self::init), even if the cache is current
    pub fn with_force_refresh(mut self, force_refresh: bool) -> Self {
        self.force_refresh = force_refresh;
        self
    }

    /// Replaces the log sink. The default sink discards messages.
    pub fn set_logger<F>(&self, sink: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger.set_sink(sink);
    }

    pub fn state(&self) -> InitState {
        *self.state.borrow()
    }

    pub fn ready_signal(&self) -> ReadySignal {
        ReadySignal {
            rx: self.state.subscribe(),
        }
    }

    /// Waits until initialization has completed successfully
    pub async fn ready(&self) {
        self.ready_signal().wait().await;
    }

    /// Runs the initialization pipeline using today's UTC date
    pub async fn init(&self) -> Result<(), TrackerError> {
        self.init_on(Utc::now().date_naive()).await
    }

    /// Runs the initialization pipeline treating `today` as the current day
    pub async fn init_on(&self, today: NaiveDate) -> Result<(), TrackerError> {
        let started = self.state.send_if_modified(|state| {
            if *state == InitState::Uninitialized {
                *state = InitState::LoadingCache;
                true
            } else {
                false
            }
        });
        if !started {
            return Err(TrackerError::AlreadyInitialized);
        }

        let mut browsers = self.browsers();
        let (mut cache, loaded) = self.store.load(&browsers);
        let force_refresh = self.force_refresh || !loaded || !cache.is_complete();

        self.transition(InitState::Refreshing);
        refresh_cache(
            &mut cache,
            &self.store,
            self.source.as_ref(),
            &browsers,
            force_refresh,
            today,
            &self.logger,
        )
        .await
        .inspect_err(|e| self.logger.error(&format!("refresh failed: {}", e)))?;

        self.transition(InitState::Parsing);
        let parsed = parse_cache(&cache, &mut browsers, self.extractor.as_ref());
        *self.write_browsers() = browsers;
        parsed.inspect_err(|e| self.logger.error(&format!("parse failed: {}", e)))?;

        self.transition(InitState::Ready);
        self.logger.info("browser data is ready");
        Ok(())
    }

    /// Returns every browser in catalog order
    pub fn browsers(&self) -> Vec<BrowserDescriptor> {
        self.read_browsers().clone()
    }

    /// Returns the browser with `id`, or `None` if it is not tracked
    pub fn browser(&self, id: &str) -> Option<BrowserDescriptor> {
        self.read_browsers().iter().find(|b| b.id == id).cloned()
    }

    /// Returns the latest version derived for `id`.
    ///
    /// `Ok(None)` means the browser is known but not parsed yet.
    pub fn latest_version(&self, id: &str) -> Result<Option<String>, TrackerError> {
        self.browser(id)
            .map(|b| b.latest_version)
            .ok_or_else(|| TrackerError::UnknownBrowser(id.to_string()))
    }

    fn transition(&self, next: InitState) {
        self.logger.debug(&format!("init state: {:?}", next));
        self.state.send_replace(next);
    }

    fn read_browsers(&self) -> RwLockReadGuard<'_, Vec<BrowserDescriptor>> {
        self.browsers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_browsers(&self) -> RwLockWriteGuard<'_, Vec<BrowserDescriptor>> {
        self.browsers.write().unwrap_or_else(|e| e.into_inner())
    }
}
