use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::browser::BrowserDescriptor;
use crate::logging::Logger;
use crate::version::error::CacheError;

/// Raw release text per browser plus the day it was fetched
///
/// Serialized as a flat object: `{ "_fetched": "YYYY-MM-DD" | null, "<id>": [..] | null }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    #[serde(rename = "_fetched", default)]
    pub fetched: Option<NaiveDate>,
    #[serde(flatten)]
    pub entries: IndexMap<String, Option<Vec<String>>>,
}

impl Cache {
    /// Creates an empty cache with one unset entry per browser
    pub fn empty(browsers: &[BrowserDescriptor]) -> Self {
        Self {
            fetched: None,
            entries: browsers.iter().map(|b| (b.id.clone(), None)).collect(),
        }
    }

    /// Returns the raw snippets stored for a browser
    pub fn entry(&self, id: &str) -> Option<&[String]> {
        self.entries.get(id).and_then(|e| e.as_deref())
    }

    pub fn set_entry(&mut self, id: &str, contents: Vec<String>) {
        self.entries.insert(id.to_string(), Some(contents));
    }

    /// Whether the cache was fetched on `day`
    pub fn is_current(&self, day: NaiveDate) -> bool {
        self.fetched == Some(day)
    }

    /// Whether every entry holds fetched data
    pub fn is_complete(&self) -> bool {
        self.entries.values().all(Option::is_some)
    }

    /// Aligns the keys with the known browsers.
    ///
    /// Unknown keys are dropped, missing ones are added unset, and the
    /// entries are reordered to match `browsers`. Returns whether anything
    /// had to change.
    pub fn reconcile(&mut self, browsers: &[BrowserDescriptor]) -> bool {
        let mut changed = self.entries.len() != browsers.len();
        let mut entries = IndexMap::with_capacity(browsers.len());

        for browser in browsers {
            let entry = match self.entries.shift_remove(&browser.id) {
                Some(entry) => entry,
                None => {
                    changed = true;
                    None
                }
            };
            entries.insert(browser.id.clone(), entry);
        }

        changed |= !self.entries.is_empty();
        self.entries = entries;
        changed
    }

    fn to_pretty_json(&self) -> Result<Vec<u8>, CacheError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// Reads and writes the cache file
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
    logger: Logger,
}

impl CacheStore {
    pub fn new(path: &Path, logger: Logger) -> Self {
        Self {
            path: path.to_path_buf(),
            logger,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Loads the cache file.
    ///
    /// Never fails: an unreadable or corrupt file yields an empty cache and
    /// `false`. A loaded cache is reconciled against `browsers`.
    pub fn load(&self, browsers: &[BrowserDescriptor]) -> (Cache, bool) {
        match self.read() {
            Ok(mut cache) => {
                if cache.reconcile(browsers) {
                    self.logger
                        .debug("cache file entries did not match known browsers, reconciled");
                }
                self.logger.info("cache loaded from cache file");
                (cache, true)
            }
            Err(e) => {
                self.logger
                    .warn(&format!("failed to read cache file {:?}: {}", self.path, e));
                (Cache::empty(browsers), false)
            }
        }
    }

    /// Writes the cache file, replacing any previous content.
    ///
    /// Returns whether the write succeeded; failures are only logged.
    pub fn save(&self, cache: &Cache) -> bool {
        match self.write(cache) {
            Ok(()) => {
                self.logger.info("cache was saved");
                true
            }
            Err(e) => {
                self.logger
                    .error(&format!("failed to save cache file {:?}: {}", self.path, e));
                false
            }
        }
    }

    fn read(&self) -> Result<Cache, CacheError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, cache: &Cache) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, cache.to_pretty_json()?)?;
        Ok(())
    }
}
