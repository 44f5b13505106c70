//! Tier 1: structural extraction from known result containers.
//!
//! The most precise tier: a container is trusted to hold exactly one
//! result, so its first heading, first outbound link and first snippet
//! marker belong together.

use crate::config::ExtractConfig;
use crate::document::RawDocument;
use crate::strategy::Strategy;
use crate::types::{Candidate, Tier};

use super::markup;

/// Container-structural strategy.
pub struct ContainerStrategy {
    config: ExtractConfig,
}

impl ContainerStrategy {
    /// Create the strategy with the given exclusion settings.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl Strategy for ContainerStrategy {
    fn tier(&self) -> Tier {
        Tier::Container
    }

    fn extract(&self, document: &RawDocument<'_>) -> Vec<Candidate> {
        let (Some(container_sel), Some(heading_sel), Some(anchor_sel)) = (
            markup::selector(markup::CONTAINER_SELECTOR),
            markup::selector(markup::HEADING_SELECTOR),
            markup::selector("a[href]"),
        ) else {
            return Vec::new();
        };
        let snippet_sels = markup::snippet_selectors();

        let mut candidates = Vec::new();
        for container in document.dom().select(&container_sel) {
            let Some(heading) = container.select(&heading_sel).next() else {
                continue;
            };
            let Some(link) = markup::first_outbound_link(&container, &anchor_sel, &self.config)
            else {
                continue;
            };

            let mut candidate = Candidate::new(Tier::Container)
                .with_title(heading.inner_html())
                .with_link(link);
            if let Some(snippet) = markup::first_snippet(&container, &snippet_sels) {
                candidate = candidate.with_snippet(snippet.inner_html());
            }
            candidates.push(candidate);
        }

        tracing::trace!(count = candidates.len(), "container tier scanned");
        candidates
    }
}
