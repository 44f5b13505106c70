//! Shared structural signals: result markers, link resolution and
//! offset-indexed scans of raw markup.
//!
//! The provider's class names are generated and change without notice.
//! Everything that encodes knowledge about them lives here so the tiers
//! themselves only describe *where* to look.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::config::ExtractConfig;
use crate::domain::host_of;

/// Result container signatures, queried as one selector so that matches
/// come back in document order.
pub const CONTAINER_SELECTOR: &str =
    "div.g, div[data-sokoban-container], div.MjjYud, div.tF2Cxc";

/// Result title nodes.
pub const HEADING_SELECTOR: &str = "h3, h2";

/// Snippet markers in priority order.
pub const SNIPPET_SELECTORS: &[&str] = &[
    "div.VwiC3b",
    "span.aCOpRe",
    "div.IsZvec",
    "div[data-sncf]",
    "div[style] > span",
];

/// The same snippet markers, expressed against raw markup.
const SNIPPET_PATTERNS: &[&str] = &[
    r#"(?is)<div\b[^>]*\bclass\s*=\s*"[^"]*\bVwiC3b\b[^"]*"[^>]*>(.*?)</div\s*>"#,
    r#"(?is)<span\b[^>]*\bclass\s*=\s*"[^"]*\baCOpRe\b[^"]*"[^>]*>(.*?)</span\s*>"#,
    r#"(?is)<div\b[^>]*\bclass\s*=\s*"[^"]*\bIsZvec\b[^"]*"[^>]*>(.*?)</div\s*>"#,
    r#"(?is)<div\b[^>]*\bdata-sncf\b[^>]*>(.*?)</div\s*>"#,
    r#"(?is)<div\b[^>]*\bstyle\s*=\s*"[^"]*"[^>]*>\s*<span\b[^>]*>(.*?)</span\s*>"#,
];

const HEADING_PATTERN: &str = r"(?is)<h([23])\b[^>]*>(.*?)</h[23]\s*>";

const LINK_PATTERN: &str = r#"(?is)<a\b[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#;

/// Base used to resolve the provider's root-relative redirect links.
const REDIRECT_BASE: &str = "https://www.google.com";

/// A matched region of raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Inner markup of the matched node.
    pub inner: &'a str,
}

/// An outbound link found in raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    /// Byte offset of the `<a` tag.
    pub start: usize,
    /// Byte offset one past the `href` attribute.
    pub end: usize,
    /// Resolved absolute target.
    pub url: String,
}

/// Resolve an `href` value to an absolute outbound `http(s)` URL.
///
/// Unwraps the provider's `/url?q=<target>` redirect, upgrades
/// protocol-relative `//host/..` links to `https:`, and rejects anything
/// that is not absolute `http(s)` afterwards.
///
/// # Examples
///
/// ```
/// use serp_extract::strategies::markup::resolve_href;
///
/// assert_eq!(
///     resolve_href("/url?q=https://example.com/a%3Fb&sa=U").as_deref(),
///     Some("https://example.com/a?b")
/// );
/// assert_eq!(resolve_href("/search?q=more"), None);
/// ```
pub fn resolve_href(href: &str) -> Option<String> {
    let href = href.trim();

    if href.starts_with("/url?") {
        let wrapped = Url::parse(&format!("{REDIRECT_BASE}{href}")).ok()?;
        let target = wrapped
            .query_pairs()
            .find(|(key, value)| (key == "q" || key == "url") && !value.is_empty())
            .map(|(_, value)| value.into_owned())?;
        return has_http_scheme(&target).then_some(target);
    }

    if let Some(rest) = href.strip_prefix("//") {
        return (!rest.is_empty()).then(|| format!("https://{rest}"));
    }

    has_http_scheme(href).then(|| href.to_owned())
}

/// Returns `true` if `link` starts with `http://` or `https://`.
pub fn has_http_scheme(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Returns `true` if `url` resolves to a host that may carry a result.
pub fn is_outbound(url: &str, config: &ExtractConfig) -> bool {
    match host_of(url) {
        Some(host) => !config.is_excluded_host(&host),
        None => false,
    }
}

/// Parse a CSS selector, logging instead of failing.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::debug!(css, error = ?e, "selector rejected");
            None
        }
    }
}

/// First snippet marker inside `scope`, honouring marker priority.
pub fn first_snippet<'a>(scope: &ElementRef<'a>, markers: &[Selector]) -> Option<ElementRef<'a>> {
    markers.iter().find_map(|sel| scope.select(sel).next())
}

/// Parsed [`SNIPPET_SELECTORS`]; unparsable entries are skipped.
pub fn snippet_selectors() -> Vec<Selector> {
    SNIPPET_SELECTORS.iter().filter_map(|css| selector(css)).collect()
}

/// The first outbound link inside `scope`, in document order.
pub fn first_outbound_link(
    scope: &ElementRef<'_>,
    anchors: &Selector,
    config: &ExtractConfig,
) -> Option<String> {
    scope
        .select(anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(resolve_href)
        .find(|url| is_outbound(url, config))
}

/// Every `<h2>`/`<h3>` in `markup`, in document order.
pub fn scan_headings(markup: &str) -> Vec<Span<'_>> {
    let Some(re) = heading_regex() else {
        return Vec::new();
    };
    re.captures_iter(markup)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(2)?;
            Some(Span {
                start: whole.start(),
                end: whole.end(),
                inner: inner.as_str(),
            })
        })
        .collect()
}

/// Every snippet marker in `markup`, ordered by offset.
pub fn scan_snippets(markup: &str) -> Vec<Span<'_>> {
    let mut spans: Vec<Span<'_>> = snippet_regexes()
        .iter()
        .flat_map(|re| {
            re.captures_iter(markup)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let inner = caps.get(1)?;
                    Some(Span {
                        start: whole.start(),
                        end: whole.end(),
                        inner: inner.as_str(),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect();
    // Stable: at equal offsets the higher-priority marker stays first.
    spans.sort_by_key(|s| s.start);
    spans
}

/// Every resolvable `http(s)` link in `markup`, in document order.
///
/// Raw attribute values are still entity-encoded, so `&amp;` is decoded
/// before resolution.
pub fn scan_links(markup: &str) -> Vec<LinkSpan> {
    let Some(re) = link_regex() else {
        return Vec::new();
    };
    re.captures_iter(markup)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let url = resolve_href(&raw.replace("&amp;", "&"))?;
            Some(LinkSpan {
                start: whole.start(),
                end: whole.end(),
                url,
            })
        })
        .collect()
}

/// Clamp the byte range `[center - before, center + after]` to `markup`.
pub fn window(markup: &str, center: usize, before: usize, after: usize) -> (usize, usize) {
    let lo = center.saturating_sub(before);
    let hi = center.saturating_add(after).min(markup.len());
    (lo, hi)
}

static HEADING_RE: OnceLock<Option<Regex>> = OnceLock::new();
static LINK_RE: OnceLock<Option<Regex>> = OnceLock::new();
static SNIPPET_RES: OnceLock<Vec<Regex>> = OnceLock::new();

fn heading_regex() -> Option<&'static Regex> {
    HEADING_RE.get_or_init(|| compile(HEADING_PATTERN)).as_ref()
}

fn link_regex() -> Option<&'static Regex> {
    LINK_RE.get_or_init(|| compile(LINK_PATTERN)).as_ref()
}

/// Compiled snippet patterns, in priority order.
fn snippet_regexes() -> &'static [Regex] {
    SNIPPET_RES.get_or_init(|| SNIPPET_PATTERNS.iter().filter_map(|p| compile(p)).collect())
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!(error = %e, "scan pattern rejected");
            None
        }
    }
}
