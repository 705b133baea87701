//! Version tracking layer
//!
//! This module provides the core functionality for fetching, caching, and
//! deriving the latest release version of each tracked browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│    Cache    │────▶│    Parse    │
//! │  (fetch)    │     │  (storage)  │     │  (derive)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │   Sources   │                         │  Extractor  │
//! │ (wikipedia) │                         │ + normalize │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: JSON file cache with daily invalidation
//! - [`refresh`]: Concurrent refresh of every browser's cache entry
//! - [`source`]: Source trait for fetching raw release text
//! - [`sources`]: Concrete source implementations (Wikipedia)
//! - [`extractor`]: Pattern-based extraction of a raw version from text
//! - [`normalize`]: Reduction of raw versions to a configured granularity
//! - [`parse`]: Derivation of each browser's latest version from the cache
//! - [`error`]: Error types for cache, fetch, and parse operations

pub mod cache;
pub mod error;
pub mod extractor;
pub mod normalize;
pub mod parse;
pub mod refresh;
pub mod source;
pub mod sources;
