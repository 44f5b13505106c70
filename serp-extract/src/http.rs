//! Provider HTTP client.
//!
//! One client is built per fetch with browser-like defaults: a rotating
//! User-Agent, an `Accept-Language` derived from the configured result
//! language, cookies for consent interstitials and compressed bodies.

use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Desktop browser User-Agents, one picked at random per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Build the provider client for `config`.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed or
/// the configured language is not a valid header value.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let user_agent = config
        .user_agent
        .clone()
        .unwrap_or_else(|| random_user_agent().to_owned());

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    let language = HeaderValue::from_str(&accept_language(&config.language))
        .map_err(|e| SearchError::Http(format!("invalid language header: {e}")))?;
    headers.insert(ACCEPT_LANGUAGE, language);

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(user_agent)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// `Accept-Language` value preferring `language`, with English as the
/// lower-weighted fallback.
pub fn accept_language(language: &str) -> String {
    let language = language.trim();
    let lower = language.to_ascii_lowercase();
    if lower == "en" {
        return "en-US,en;q=0.9".to_owned();
    }
    if lower.starts_with("en-") {
        return format!("{language},en;q=0.9");
    }
    format!("{language},en-US;q=0.9,en;q=0.8")
}

/// Pick a User-Agent from the rotation list.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
