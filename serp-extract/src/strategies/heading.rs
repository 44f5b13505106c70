//! Tier 2: heading-anchored extraction over raw markup.
//!
//! Tolerates missing or renamed containers: every heading is a potential
//! title, and its link and snippet are whatever sits closest to it in the
//! markup.

use crate::config::ExtractConfig;
use crate::document::RawDocument;
use crate::strategy::Strategy;
use crate::types::{Candidate, Tier};

use super::markup::{self, LinkSpan};

/// Heading-anchored strategy.
pub struct HeadingStrategy {
    config: ExtractConfig,
}

impl HeadingStrategy {
    /// Create the strategy with the given windows and exclusions.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Strategy for HeadingStrategy {
    fn tier(&self) -> Tier {
        Tier::Heading
    }

    fn extract(&self, document: &RawDocument<'_>) -> Vec<Candidate> {
        let markup = document.markup();
        let headings = markup::scan_headings(markup);
        if headings.is_empty() {
            return Vec::new();
        }
        let links: Vec<LinkSpan> = markup::scan_links(markup)
            .into_iter()
            .filter(|l| markup::is_outbound(&l.url, &self.config))
            .collect();
        let snippets = markup::scan_snippets(markup);

        let mut candidates = Vec::new();
        for heading in &headings {
            let (lo, hi) = markup::window(
                markup,
                heading.start,
                self.config.heading_window_before,
                self.config.heading_window_after,
            );

            // Spans are sorted by start offset.
            let first_link = links.partition_point(|l| l.start < lo);
            let nearest = links[first_link..]
                .iter()
                .take_while(|l| l.start <= hi)
                .filter(|l| l.end <= hi)
                .min_by_key(|l| l.start.abs_diff(heading.start));
            let Some(link) = nearest else {
                continue;
            };

            let mut candidate = Candidate::new(Tier::Heading)
                .with_title(heading.inner)
                .with_link(link.url.clone());
            let first_snippet = snippets.partition_point(|s| s.start < heading.end);
            if let Some(snippet) = snippets[first_snippet..]
                .iter()
                .take_while(|s| s.start <= hi)
                .find(|s| s.end <= hi)
            {
                candidate = candidate.with_snippet(snippet.inner);
            }
            candidates.push(candidate);
        }

        tracing::trace!(
            headings = headings.len(),
            count = candidates.len(),
            "heading tier scanned"
        );
        candidates
    }
}
