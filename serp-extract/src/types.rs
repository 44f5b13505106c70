//! Core types for extracted results, in-flight candidates and strategy tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validated search result.
///
/// Constructed only by the extraction engine (after the validity gate) or
/// by the fallback generator; immutable from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title, HTML-stripped and never empty.
    pub title: String,
    /// Absolute `http(s)` target URL. Unique within one result list.
    pub link: String,
    /// Display snippet, HTML-stripped, at most 300 characters. May be empty.
    pub snippet: String,
    /// Host of `link` with one leading `www.` removed. `None` only when
    /// `link` does not parse as a URL.
    #[serde(
        rename = "displayLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_link: Option<String>,
}

/// The structured answer returned across the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query exactly as the caller supplied it.
    pub query: String,
    /// Ranked results, discovery order.
    pub results: Vec<SearchResult>,
    /// Number of entries in `results`.
    pub count: usize,
}

impl SearchResponse {
    /// Wrap an ordered result list together with its query.
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        let count = results.len();
        Self {
            query: query.into(),
            results,
            count,
        }
    }
}

/// The strategy tiers, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Known result containers queried through the DOM.
    Container,
    /// Headings scanned in raw markup with a surrounding window.
    Heading,
    /// Outbound links scanned in raw markup with a forward window.
    LinkScan,
    /// Every outbound link in the DOM, titles inferred from context.
    LinkHarvest,
}

impl Tier {
    /// Returns the stable name of this tier, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Heading => "heading",
            Self::LinkScan => "link-scan",
            Self::LinkHarvest => "link-harvest",
        }
    }

    /// Returns all tiers in priority order.
    pub fn all() -> &'static [Tier] {
        &[
            Self::Container,
            Self::Heading,
            Self::LinkScan,
            Self::LinkHarvest,
        ]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A provisional result produced by a strategy.
///
/// Fields hold raw markup fragments or unresolved values; nothing here is
/// trusted until the engine validates and normalises it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The tier that discovered this candidate.
    pub tier: Tier,
    /// Title markup, if one was found.
    pub title: Option<String>,
    /// Resolved target URL, if one was found.
    pub link: Option<String>,
    /// Snippet markup, if one was found.
    pub snippet: Option<String>,
}

impl Candidate {
    /// An empty candidate for `tier`.
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            title: None,
            link: None,
            snippet: None,
        }
    }

    /// Set the title markup.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the resolved link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the snippet markup.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}
