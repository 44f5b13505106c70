//! # serp-extract
//!
//! Ranked web results from unstable search-engine HTML.
//!
//! The provider's markup changes without notice, so extraction is a
//! cascade of progressively more permissive strategies:
//!
//! 1. **container**: known result containers, queried through the DOM
//! 2. **heading**: every `h2`/`h3`, paired with the nearest outbound link
//! 3. **link-scan**: every outbound link, with the heading that follows it
//! 4. **link-harvest**: every outbound link, title inferred from context
//!
//! Later tiers run only while earlier ones found too little. Every
//! candidate is validated, normalised to plain text, deduplicated by link
//! and capped. If nothing survives, a deterministic fallback set keyed on
//! the query is returned, so callers always get a non-empty list.
//!
//! ## Security
//!
//! - Queries and markup are logged only at trace level
//! - Titles and snippets are stripped of tags and entities before returning
//! - Links are always absolute `http(s)` URLs

pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod fetch;
pub mod http;
pub mod strategies;
pub mod strategy;
pub mod text;
pub mod types;

pub use config::{ExtractConfig, SearchConfig, TierThresholds};
pub use error::{Result, SearchError};
pub use extractor::observer::{ExtractionObserver, NoopObserver, TracingObserver};
pub use extractor::{extract_results, Extractor};
pub use strategy::Strategy;
pub use types::{SearchResponse, SearchResult, Tier};

/// Fetch the provider page for `query` and extract ranked results.
///
/// Builds a fresh [`Extractor`] from `config.extract`. Long-lived callers
/// should keep one and use [`search_with`].
///
/// # Errors
///
/// - [`SearchError::Config`] if `config` or the extractor's settings are invalid
/// - [`SearchError::MissingQuery`] if `query` is blank
/// - [`SearchError::Http`] or [`SearchError::Timeout`] if the fetch fails
///
/// Extraction itself never fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> serp_extract::Result<()> {
/// let config = serp_extract::SearchConfig::default();
/// let response = serp_extract::search("rust programming", &config).await?;
/// for result in &response.results {
///     println!("{}: {}", result.title, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<SearchResponse> {
    let extractor = Extractor::new(config.extract.clone());
    search_with(query, config, &extractor).await
}

/// Like [`search`], with a caller-supplied extractor.
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_with(
    query: &str,
    config: &SearchConfig,
    extractor: &Extractor,
) -> Result<SearchResponse> {
    config.validate()?;
    extractor.config().validate()?;
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::MissingQuery);
    }

    let html = fetch::fetch_html(trimmed, config).await?;
    let results = extractor.extract(&html, trimmed);
    tracing::debug!(count = results.len(), "search complete");
    Ok(SearchResponse::new(query, results))
}
