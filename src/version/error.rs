use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Wikipedia service returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Failed to fetch data for {id}: {source}")]
    Fetch {
        id: String,
        #[source]
        source: FetchError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to parse data for {id}")]
    NoMatch { id: String },

    #[error("Failed to normalize version {version:?} for {id}")]
    Normalize { id: String, version: String },
}
