//! Tier 3: link-anchored broad scan over raw markup.
//!
//! Starts from every outbound link instead of every heading and looks a
//! fixed distance ahead for the title and snippet that usually follow it.

use std::collections::HashSet;

use crate::config::ExtractConfig;
use crate::document::RawDocument;
use crate::strategy::Strategy;
use crate::types::{Candidate, Tier};

use super::markup::{self, Span};

/// Link-anchored strategy.
pub struct LinkScanStrategy {
    config: ExtractConfig,
}

impl LinkScanStrategy {
    /// Create the strategy with the given window and exclusions.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Strategy for LinkScanStrategy {
    fn tier(&self) -> Tier {
        Tier::LinkScan
    }

    fn extract(&self, document: &RawDocument<'_>) -> Vec<Candidate> {
        let markup = document.markup();
        let headings = markup::scan_headings(markup);
        let snippets = markup::scan_snippets(markup);

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for link in markup::scan_links(markup) {
            if !markup::is_outbound(&link.url, &self.config) || !seen.insert(link.url.clone()) {
                continue;
            }
            let (lo, hi) = markup::window(markup, link.start, 0, self.config.link_window_after);

            let mut candidate = Candidate::new(Tier::LinkScan).with_link(link.url);
            if let Some(heading) = first_within(&headings, lo, hi) {
                candidate = candidate.with_title(heading.inner);
            }
            if let Some(snippet) = first_within(&snippets, lo, hi) {
                candidate = candidate.with_snippet(snippet.inner);
            }
            candidates.push(candidate);
        }

        tracing::trace!(count = candidates.len(), "link-scan tier scanned");
        candidates
    }
}

/// First span lying wholly inside `[lo, hi]`. `spans` must be sorted by start.
fn first_within<'s, 'a>(spans: &'s [Span<'a>], lo: usize, hi: usize) -> Option<&'s Span<'a>> {
    let first = spans.partition_point(|s| s.start < lo);
    spans[first..]
        .iter()
        .take_while(|s| s.start <= hi)
        .find(|s| s.end <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> Vec<Candidate> {
        let doc = RawDocument::parse(html, "q");
        LinkScanStrategy::new(&ExtractConfig::default()).extract(&doc)
    }

    #[test]
    fn finds_heading_and_snippet_ahead_of_link() {
        let html = r#"<a href="/url?q=https://crates.io/&amp;sa=U"><div><div><h3>crates.io</h3></div></div></a>
            <div class="VwiC3b">The Rust community's crate registry.</div>"#;
        let candidates = run(html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].link.as_deref(), Some("https://crates.io/"));
        assert_eq!(candidates[0].title.as_deref(), Some("crates.io"));
        assert_eq!(
            candidates[0].snippet.as_deref(),
            Some("The Rust community's crate registry.")
        );
    }

    #[test]
    fn heading_behind_link_is_not_used() {
        let html = r#"<h3>Earlier</h3><a href="https://a.com/">a</a>"#;
        let candidates = run(html);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].title.is_none());
    }

    #[test]
    fn heading_beyond_window_is_not_used() {
        let html = format!(
            r#"<a href="https://a.com/">a</a>{}<h3>Too far</h3>"#,
            " ".repeat(900)
        );
        let candidates = run(&html);
        assert!(candidates[0].title.is_none());
    }

    #[test]
    fn excluded_and_repeated_links_are_skipped() {
        let html = r#"
            <a href="https://www.google.com/search?q=x">g</a>
            <a href="https://www.youtube.com/watch?v=1">yt</a>
            <a href="https://maps.google.com/">maps</a>
            <a href="https://a.com/"><h3>A</h3></a>
            <a href="https://a.com/"><h3>A again</h3></a>"#;
        let candidates = run(html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].link.as_deref(), Some("https://a.com/"));
        assert_eq!(candidates[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn long_page_reads_title_and_snippet_ahead_of_each_link() {
        let html: String = (0..2000)
            .map(|i| {
                let anchor =
                    format!(r#"<a href="https://site{i}.example/"><h3>Title {i}</h3></a>"#);
                let snippet = format!(r#"<div class="VwiC3b">Snippet {i}</div>"#);
                format!("<div>{anchor}{snippet}</div>")
            })
            .collect();
        let candidates = run(&html);
        assert_eq!(candidates.len(), 2000);
        for i in [0, 1, 999, 1234, 1999] {
            let c = &candidates[i];
            assert_eq!(c.link.as_deref(), Some(format!("https://site{i}.example/").as_str()));
            assert_eq!(c.title.as_deref(), Some(format!("Title {i}").as_str()));
            assert_eq!(c.snippet.as_deref(), Some(format!("Snippet {i}").as_str()));
        }
    }

    #[test]
    fn first_within_skips_spans_before_window() {
        let spans: Vec<Span<'_>> = [(0, 5, "a"), (10, 20, "b"), (15, 40, "c"), (30, 35, "d")]
            .into_iter()
            .map(|(start, end, inner)| Span { start, end, inner })
            .collect();
        assert_eq!(first_within(&spans, 6, 35).map(|s| s.inner), Some("b"));
        assert_eq!(first_within(&spans, 11, 35).map(|s| s.inner), Some("d"));
        assert_eq!(first_within(&spans, 11, 32).map(|s| s.inner), None);
        assert_eq!(first_within(&[], 0, 100).map(|s| s.inner), None);
    }

    #[test]
    fn empty_markup_yields_nothing() {
        assert!(run("").is_empty());
    }
}
