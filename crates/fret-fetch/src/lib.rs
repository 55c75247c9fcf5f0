//! Remote fetch and parse adapter.
//!
//! Retrieves tab and search pages from the upstream site, locates the
//! embedded JSON state (the `js-store` div's `data-content` attribute),
//! and parses it into the song and search data model. Every failure mode
//! (network, missing store, unexpected payload shape) collapses into one
//! domain error carrying a human-readable message; nothing is retried
//! here.

pub mod client;
pub mod diagrams;
pub mod model;
pub mod store;

pub use client::UgClient;
pub use model::{Search, SearchResult, SongDetail};

/// The single fetch-layer error. Variants of failure are distinguished
/// only by message, per the adapter contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::new(format!("request failed: {e}"))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::new(format!("malformed embedded JSON: {e}"))
    }
}
