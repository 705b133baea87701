use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

// =============================================================================
// Network-related constants
// =============================================================================

/// Default base URL of the MediaWiki installation queried for release templates
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every API request
pub const USER_AGENT: &str = concat!("browse-happy/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tracker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Location of the cache file, defaults to [`cache_path`]
    pub cache_path: Option<PathBuf>,
    /// Base URL of the MediaWiki API host
    pub api_url: String,
    /// Per-request timeout in milliseconds; `0` leaves the transport default in place
    pub fetch_timeout_ms: u64,
    /// JSON file replacing the bundled browser list
    pub browsers_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_path: None,
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            browsers_file: None,
        }
    }
}

impl Config {
    /// Reads a config file. Missing fields fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn cache_path(&self) -> PathBuf {
        self.cache_path.clone().unwrap_or_else(cache_path)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout_ms > 0).then(|| Duration::from_millis(self.fetch_timeout_ms))
    }
}

/// Returns the path to the data directory for browse-happy.
/// Uses $XDG_DATA_HOME/browse-happy if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/browse-happy,
/// or ./browse-happy if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the cache file.
pub fn cache_path() -> PathBuf {
    data_dir().join("cache.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("browse-happy.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("browse-happy")
}
