//! First-seen-wins deduplication with a hard cap.
//!
//! Results are kept in the order they were offered. A later result whose
//! `link` has already been accepted is discarded even if it came from a
//! different tier, and nothing is accepted once the cap is reached.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Ordered, capped, link-unique accumulator.
#[derive(Debug)]
pub struct ResultSet {
    results: Vec<SearchResult>,
    links: HashSet<String>,
    cap: usize,
}

impl ResultSet {
    /// An empty set accepting at most `cap` results.
    pub fn new(cap: usize) -> Self {
        Self {
            results: Vec::with_capacity(cap),
            links: HashSet::with_capacity(cap),
            cap,
        }
    }

    /// Offer a result. Returns `true` if it was accepted.
    pub fn offer(&mut self, result: SearchResult) -> bool {
        if self.is_full() || self.links.contains(&result.link) {
            return false;
        }
        self.links.insert(result.link.clone());
        self.results.push(result);
        true
    }

    /// Number of accepted results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing was accepted.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` once the cap is reached.
    pub fn is_full(&self) -> bool {
        self.results.len() >= self.cap
    }

    /// Consume the set, yielding results in acceptance order.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(link: &str, title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: link.to_string(),
            snippet: String::new(),
            display_link: None,
        }
    }

    #[test]
    fn unique_links_pass_through_in_order() {
        let mut set = ResultSet::new(10);
        assert!(set.offer(make_result("https://b.com", "B")));
        assert!(set.offer(make_result("https://a.com", "A")));
        let links: Vec<String> = set.into_results().into_iter().map(|r| r.link).collect();
        assert_eq!(links, vec!["https://b.com", "https://a.com"]);
    }

    #[test]
    fn first_occurrence_wins() {
        let mut set = ResultSet::new(10);
        assert!(set.offer(make_result("https://example.com", "First")));
        assert!(!set.offer(make_result("https://example.com", "Second")));
        assert!(!set.offer(make_result("https://example.com", "Third")));
        let results = set.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "First");
    }

    #[test]
    fn links_compare_exactly() {
        let mut set = ResultSet::new(10);
        assert!(set.offer(make_result("https://example.com/", "slash")));
        assert!(set.offer(make_result("https://example.com", "bare")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn cap_stops_acceptance() {
        let mut set = ResultSet::new(2);
        assert!(set.offer(make_result("https://a.com", "A")));
        assert!(set.offer(make_result("https://b.com", "B")));
        assert!(set.is_full());
        assert!(!set.offer(make_result("https://c.com", "C")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_set_reports_empty() {
        let set = ResultSet::new(10);
        assert!(set.is_empty());
        assert!(!set.is_full());
        assert!(set.into_results().is_empty());
    }
}
