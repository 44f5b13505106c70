//! Error types for the serp-extract crate.
//!
//! Only the request boundary and the fetch adapter can fail. Malformed
//! markup never surfaces here: the extraction engine absorbs it and, at
//! worst, answers with the fallback set.

/// Errors that can occur while serving a search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The required query was absent or blank. Extraction never runs.
    #[error("query parameter is required")]
    MissingQuery,

    /// The upstream provider could not be reached or answered with a
    /// non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The upstream request exceeded its time budget and was cancelled.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns `true` for failures caused by the upstream provider
    /// (network, status, timeout) rather than by the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }
}

/// Convenience type alias for serp-extract results.
pub type Result<T> = std::result::Result<T, SearchError>;
