//! Trait definition for pluggable extraction strategies.
//!
//! Each tier of the cascade (container, heading, link scan, link harvest)
//! implements [`Strategy`] so the extraction engine can run them in order
//! and stop as soon as the results are good enough.

use crate::document::RawDocument;
use crate::types::{Candidate, Tier};

/// One independent heuristic about where results live in provider markup.
///
/// Implementors must be pure and must never fail: an internal problem
/// (an unparsable selector, a malformed link) degrades to "no candidates"
/// for that strategy and never aborts extraction.
///
/// All implementations must be `Send + Sync` so a cascade can be shared
/// between concurrent request handlers.
pub trait Strategy: Send + Sync {
    /// Which tier this strategy implements.
    fn tier(&self) -> Tier;

    /// Produce candidates from `document`, in discovery order.
    ///
    /// The query is available through [`RawDocument::query`].
    fn extract(&self, document: &RawDocument<'_>) -> Vec<Candidate>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mock strategy for testing trait bounds and object safety.
    struct MockStrategy {
        tier: Tier,
        links: Vec<&'static str>,
    }

    impl Strategy for MockStrategy {
        fn tier(&self) -> Tier {
            self.tier
        }

        fn extract(&self, document: &RawDocument<'_>) -> Vec<Candidate> {
            self.links
                .iter()
                .map(|l| {
                    Candidate::new(self.tier)
                        .with_title(document.query())
                        .with_link(*l)
                })
                .collect()
        }
    }

    #[test]
    fn mock_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockStrategy>();
    }

    #[test]
    fn strategies_are_object_safe() {
        let boxed: Vec<Box<dyn Strategy>> = vec![
            Box::new(MockStrategy {
                tier: Tier::Container,
                links: vec!["https://a.com/"],
            }),
            Box::new(MockStrategy {
                tier: Tier::LinkHarvest,
                links: vec![],
            }),
        ];
        let doc = RawDocument::parse("", "rust");
        assert_eq!(boxed[0].extract(&doc).len(), 1);
        assert!(boxed[1].extract(&doc).is_empty());
        assert_eq!(boxed[1].tier(), Tier::LinkHarvest);
    }

    #[test]
    fn query_reaches_strategies() {
        let strategy = MockStrategy {
            tier: Tier::Heading,
            links: vec!["https://a.com/"],
        };
        let doc = RawDocument::parse("<p></p>", "ownership");
        let candidates = strategy.extract(&doc);
        assert_eq!(candidates[0].title.as_deref(), Some("ownership"));
    }
}
