//! Source implementations for fetching release text

pub mod wikipedia;

pub use wikipedia::WikipediaSource;
