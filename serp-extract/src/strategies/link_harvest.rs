//! Tier 4: last-resort harvest of every outbound link.
//!
//! Nothing about the surrounding structure is assumed. The title is
//! inferred from whatever context the link has, and short titles (icons,
//! labels, arrows) are discarded.

use std::collections::HashSet;

use scraper::{ElementRef, Selector};

use crate::config::ExtractConfig;
use crate::document::RawDocument;
use crate::domain::domain_of;
use crate::strategy::Strategy;
use crate::text::normalize;
use crate::types::{Candidate, Tier};

use super::markup;

/// How many ancestor levels are searched for a snippet marker.
const SNIPPET_SEARCH_DEPTH: usize = 4;

/// Pure link-harvest strategy.
pub struct LinkHarvestStrategy {
    config: ExtractConfig,
}

impl LinkHarvestStrategy {
    /// Create the strategy with the given exclusions and title threshold.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Strategy for LinkHarvestStrategy {
    fn tier(&self) -> Tier {
        Tier::LinkHarvest
    }

    fn extract(&self, document: &RawDocument<'_>) -> Vec<Candidate> {
        let (Some(anchor_sel), Some(heading_sel)) = (
            markup::selector("a[href]"),
            markup::selector(markup::HEADING_SELECTOR),
        ) else {
            return Vec::new();
        };
        let snippet_sels = markup::snippet_selectors();

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for anchor in document.dom().select(&anchor_sel) {
            let Some(url) = anchor.value().attr("href").and_then(markup::resolve_href) else {
                continue;
            };
            if !markup::is_outbound(&url, &self.config) || !seen.insert(url.clone()) {
                continue;
            }

            let title = infer_title(&anchor, &heading_sel, &url);
            if normalize(&title).chars().count() <= self.config.min_harvest_title_chars {
                continue;
            }

            let mut candidate = Candidate::new(Tier::LinkHarvest)
                .with_title(title)
                .with_link(url);
            if let Some(snippet) = nearest_snippet(&anchor, &snippet_sels) {
                candidate = candidate.with_snippet(snippet.inner_html());
            }
            candidates.push(candidate);
        }

        tracing::trace!(count = candidates.len(), "link-harvest tier scanned");
        candidates
    }
}

/// Heading inside the link, else the link text, else the enclosing
/// heading, else the link's domain.
fn infer_title(anchor: &ElementRef<'_>, heading_sel: &Selector, url: &str) -> String {
    let non_blank = |markup: String| (!normalize(&markup).is_empty()).then_some(markup);

    anchor
        .select(heading_sel)
        .next()
        .and_then(|h| non_blank(h.inner_html()))
        .or_else(|| non_blank(anchor.inner_html()))
        .or_else(|| {
            anchor
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| is_heading(el.value().name()))
                .and_then(|h| non_blank(h.inner_html()))
        })
        .unwrap_or_else(|| domain_of(url))
}

/// The first snippet marker in the closest ancestor that has one.
fn nearest_snippet<'a>(anchor: &ElementRef<'a>, markers: &[Selector]) -> Option<ElementRef<'a>> {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take(SNIPPET_SEARCH_DEPTH)
        .find_map(|scope| markup::first_snippet(&scope, markers))
}

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}
