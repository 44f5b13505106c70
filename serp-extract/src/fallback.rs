//! Deterministic synthetic results for when extraction finds nothing.
//!
//! The set is a pure function of the query: no randomness, clock or I/O.
//! Entries have exactly the shape of genuine results, so callers render
//! them without special casing. Links point at reserved `.example` hosts
//! and can never collide with a real result.

use url::form_urlencoded;

use crate::config::DEFAULT_SNIPPET_MAX_CHARS;
use crate::domain::host_of;
use crate::text::{normalize, truncate_chars};
use crate::types::SearchResult;

/// Number of entries in every fallback set.
pub const FALLBACK_LEN: usize = 5;

/// Subject used in templates when the query has no displayable text.
const EMPTY_SUBJECT: &str = "search";

/// `(title, link prefix, snippet)` templates. `{q}` in titles and snippets
/// is the display subject; the link prefix is followed by the encoded query.
const TEMPLATES: [(&str, &str, &str); FALLBACK_LEN] = [
    (
        "{q} - Overview",
        "https://search.example/results?q=",
        "An overview of {q}: introductory material, key concepts and the resources most often referenced.",
    ),
    (
        "{q} Documentation - Getting Started",
        "https://docs.example/guide?topic=",
        "Start here for {q}. Installation, first steps and reference documentation, organised for newcomers.",
    ),
    (
        "Learn {q} - Step-by-step Tutorial",
        "https://learn.example/tutorials?topic=",
        "A free interactive course on {q}. Work through short lessons with examples and exercises at your own pace.",
    ),
    (
        "{q} - Community Discussion",
        "https://forum.example/topics?tag=",
        "Questions, answers and practical advice about {q} from the community.",
    ),
    (
        "Latest news about {q}",
        "https://news.example/latest?topic=",
        "Recent articles, announcements and updates related to {q}.",
    ),
];

/// Build the fallback set for `query`. Always exactly [`FALLBACK_LEN`] entries.
///
/// # Examples
///
/// ```
/// let results = serp_extract::fallback::synthetic_results("foo");
/// assert_eq!(results.len(), 5);
/// assert!(results[0].title.contains("foo"));
/// ```
pub fn synthetic_results(query: &str) -> Vec<SearchResult> {
    synthetic_results_with_limit(query, DEFAULT_SNIPPET_MAX_CHARS)
}

/// Like [`synthetic_results`], with snippets cut to `snippet_max_chars`.
pub fn synthetic_results_with_limit(query: &str, snippet_max_chars: usize) -> Vec<SearchResult> {
    let subject = normalize(query);
    let subject = if subject.is_empty() {
        EMPTY_SUBJECT.to_owned()
    } else {
        subject
    };
    let trimmed = match query.trim() {
        "" => EMPTY_SUBJECT,
        t => t,
    };
    let encoded: String = form_urlencoded::byte_serialize(trimmed.as_bytes()).collect();

    TEMPLATES
        .iter()
        .map(|(title, prefix, snippet)| {
            let link = format!("{prefix}{encoded}");
            SearchResult {
                title: title.replace("{q}", &subject),
                display_link: host_of(&link),
                snippet: truncate_chars(&snippet.replace("{q}", &subject), snippet_max_chars),
                link,
            }
        })
        .collect()
}
