//! Extraction engine: tier cascade, validity gate, dedup and fallback.
//!
//! The engine parses the markup once, runs the container tier, then
//! consults each later tier only while the accepted result count is below
//! that tier's threshold. Every candidate passes through [`gate::admit`]
//! and a first-seen-wins [`dedup::ResultSet`] capped at
//! `ExtractConfig::max_results`. When nothing survives, the deterministic
//! fallback set is returned instead, so the output is never empty.

pub mod dedup;
pub mod gate;
pub mod observer;

use std::fmt;
use std::sync::Arc;

use crate::config::ExtractConfig;
use crate::document::RawDocument;
use crate::fallback::{synthetic_results_with_limit, FALLBACK_LEN};
use crate::strategies;
use crate::strategy::Strategy;
use crate::types::{SearchResult, Tier};

use dedup::ResultSet;
use observer::{ExtractionObserver, TracingObserver};

/// Runs the strategy cascade over raw result pages.
///
/// An `Extractor` holds no per-call state and can be shared across tasks.
pub struct Extractor {
    config: ExtractConfig,
    strategies: Vec<Box<dyn Strategy>>,
    observer: Arc<dyn ExtractionObserver>,
}

impl Extractor {
    /// The standard four-tier cascade reporting through `tracing`.
    pub fn new(config: ExtractConfig) -> Self {
        let strategies = strategies::cascade(&config);
        Self {
            config,
            strategies,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer.
    pub fn with_observer(mut self, observer: Arc<dyn ExtractionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the strategy list. Strategies run in the given order and
    /// are gated by the threshold of the tier they report.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn Strategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// The configuration this extractor was built with.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract ranked results from `raw_html`.
    ///
    /// Never fails and never returns an empty list. `query` is only used
    /// to parameterise the fallback set.
    pub fn extract(&self, raw_html: &str, query: &str) -> Vec<SearchResult> {
        tracing::trace!(query, bytes = raw_html.len(), "extracting results");
        let document = RawDocument::parse(raw_html, query);

        let mut accepted = ResultSet::new(self.config.max_results);
        let mut stopped_at = None;
        for strategy in &self.strategies {
            let tier = strategy.tier();
            if accepted.is_full() || !self.should_run(tier, accepted.len()) {
                self.observer.tier_skipped(tier, accepted.len());
                continue;
            }

            let candidates = strategy.extract(&document);
            let produced = candidates.len();
            let before = accepted.len();
            for candidate in candidates {
                if accepted.is_full() {
                    break;
                }
                if let Some(result) = gate::admit(candidate, &self.config) {
                    accepted.offer(result);
                }
            }
            stopped_at = Some(tier);
            self.observer
                .tier_finished(tier, produced, accepted.len() - before, accepted.len());
        }

        if accepted.is_empty() {
            self.observer
                .extraction_finished(stopped_at, FALLBACK_LEN, true);
            return synthetic_results_with_limit(query, self.config.snippet_max_chars);
        }

        let results = accepted.into_results();
        self.observer
            .extraction_finished(stopped_at, results.len(), false);
        results
    }

    /// The container tier always runs; later tiers run while the count is
    /// below their threshold.
    fn should_run(&self, tier: Tier, accepted: usize) -> bool {
        let thresholds = &self.config.thresholds;
        match tier {
            Tier::Container => true,
            Tier::Heading => accepted < thresholds.heading,
            Tier::LinkScan => accepted < thresholds.link_scan,
            Tier::LinkHarvest => accepted < thresholds.link_harvest,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiers: Vec<Tier> = self.strategies.iter().map(|s| s.tier()).collect();
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .field("tiers", &tiers)
            .finish_non_exhaustive()
    }
}

/// Extract results from `raw_html` with the default configuration.
///
/// # Examples
///
/// ```
/// let results = serp_extract::extract_results("", "foo");
/// assert_eq!(results.len(), 5);
/// ```
pub fn extract_results(raw_html: &str, query: &str) -> Vec<SearchResult> {
    Extractor::default().extract(raw_html, query)
}
