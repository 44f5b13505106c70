//! Search and extraction configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the upstream request made by the fetch
//! adapter. [`ExtractConfig`] holds the tunables of the extraction cascade:
//! caps, windows, tier thresholds and the domain exclusion list. The
//! defaults reproduce the behaviour the extractor was tuned against.

use crate::error::SearchError;

/// Default upstream endpoint queried by the fetch adapter.
pub const DEFAULT_ENDPOINT: &str = "https://www.google.com/search";

/// Snippets longer than this many characters are truncated.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 300;

/// Domains that never yield a result: the provider itself, its media and
/// help hosts, and asset or cache hosts.
pub const DEFAULT_EXCLUDED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "support.google.com",
    "gstatic.com",
    "googleusercontent.com",
];

/// Configuration for a fetch-then-extract search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upstream search URL. The query is sent as the `q` parameter.
    pub endpoint: String,
    /// Interface language sent as `hl` and in `Accept-Language`.
    pub language: String,
    /// Upstream request timeout in seconds. The request is cancelled when
    /// it expires.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Extraction cascade settings.
    pub extract: ExtractConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            language: "ja".to_owned(),
            timeout_seconds: 10,
            user_agent: None,
            extract: ExtractConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `endpoint` must be an absolute `http(s)` URL
    /// - `timeout_seconds` must be greater than 0
    /// - `language` must not be blank
    /// - the nested [`ExtractConfig`] must be valid
    pub fn validate(&self) -> Result<(), SearchError> {
        match url::Url::parse(&self.endpoint) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => {}
            _ => {
                return Err(SearchError::Config(format!(
                    "endpoint must be an absolute http(s) URL, got {:?}",
                    self.endpoint
                )))
            }
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(SearchError::Config("language must not be empty".into()));
        }
        self.extract.validate()
    }
}

/// Minimum accepted-result counts that gate the permissive tiers.
///
/// A tier runs only while the number of results accepted so far is
/// strictly below its threshold. The container tier always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Heading tier runs when fewer than this many results were accepted.
    pub heading: usize,
    /// Link-scan tier threshold.
    pub link_scan: usize,
    /// Link-harvest tier threshold.
    pub link_harvest: usize,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            heading: 3,
            link_scan: 3,
            link_harvest: 3,
        }
    }
}

/// Tunables for the extraction cascade.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Hard cap on returned results.
    pub max_results: usize,
    /// Snippets are truncated to this many characters.
    pub snippet_max_chars: usize,
    /// Link-harvest titles must be longer than this many characters.
    pub min_harvest_title_chars: usize,
    /// Markup bytes searched before a heading for its link.
    pub heading_window_before: usize,
    /// Markup bytes searched after a heading for its link and snippet.
    pub heading_window_after: usize,
    /// Markup bytes searched after a link for its heading and snippet.
    pub link_window_after: usize,
    /// Gates for tiers 2..4.
    pub thresholds: TierThresholds,
    /// Hosts (and their subdomains) that never produce a result.
    pub excluded_domains: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
            min_harvest_title_chars: 3,
            heading_window_before: 500,
            heading_window_after: 1000,
            link_window_after: 800,
            thresholds: TierThresholds::default(),
            excluded_domains: DEFAULT_EXCLUDED_DOMAINS
                .iter()
                .map(|d| (*d).to_owned())
                .collect(),
        }
    }
}

impl ExtractConfig {
    /// Validates the cascade settings.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `snippet_max_chars` must be greater than 0
    /// - the forward scan windows must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.snippet_max_chars == 0 {
            return Err(SearchError::Config(
                "snippet_max_chars must be greater than 0".into(),
            ));
        }
        if self.heading_window_after == 0 || self.link_window_after == 0 {
            return Err(SearchError::Config(
                "forward scan windows must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Returns `true` if `host` belongs to an excluded domain.
    pub fn is_excluded_host(&self, host: &str) -> bool {
        self.excluded_domains
            .iter()
            .any(|d| crate::domain::host_matches(host, d))
    }
}
