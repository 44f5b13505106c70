//! The validity gate between a [`Candidate`] and a [`SearchResult`].

use crate::config::ExtractConfig;
use crate::domain::host_of;
use crate::strategies::markup::has_http_scheme;
use crate::text::{normalize, truncate_chars};
use crate::types::{Candidate, SearchResult};

/// Validate and normalise a candidate.
///
/// Returns `None` unless the normalised title is non-empty and the link
/// starts with an `http(s)` scheme. The snippet is normalised and
/// truncated; `display_link` is derived from the link.
pub fn admit(candidate: Candidate, config: &ExtractConfig) -> Option<SearchResult> {
    let link = candidate.link?.trim().to_owned();
    if !has_http_scheme(&link) {
        return None;
    }

    let title = normalize(candidate.title.as_deref()?);
    if title.is_empty() {
        return None;
    }

    let snippet = candidate
        .snippet
        .as_deref()
        .map(|s| truncate_chars(&normalize(s), config.snippet_max_chars))
        .unwrap_or_default();

    Some(SearchResult {
        title,
        display_link: host_of(&link),
        link,
        snippet,
    })
}
