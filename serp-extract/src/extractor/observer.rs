//! Injectable observability hook for the extraction cascade.
//!
//! Observers receive counts only. Queries and markup never pass through
//! this interface.

use crate::types::Tier;

/// Receives per-tier progress from an [`super::Extractor`].
///
/// All methods have empty default bodies so implementors can pick the
/// events they care about.
pub trait ExtractionObserver: Send + Sync {
    /// A tier ran. `produced` candidates came out of the strategy,
    /// `accepted` of them survived validation and dedup, and `total` is
    /// the running result count afterwards.
    fn tier_finished(&self, tier: Tier, produced: usize, accepted: usize, total: usize) {
        let _ = (tier, produced, accepted, total);
    }

    /// A tier was skipped because `total` results already satisfied its
    /// threshold or the cap was reached.
    fn tier_skipped(&self, tier: Tier, total: usize) {
        let _ = (tier, total);
    }

    /// Extraction completed. `stopped_at` is the last tier that ran.
    fn extraction_finished(&self, stopped_at: Option<Tier>, total: usize, used_fallback: bool) {
        let _ = (stopped_at, total, used_fallback);
    }
}

/// Emits observer events as `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExtractionObserver for TracingObserver {
    fn tier_finished(&self, tier: Tier, produced: usize, accepted: usize, total: usize) {
        tracing::debug!(%tier, produced, accepted, total, "tier finished");
    }

    fn tier_skipped(&self, tier: Tier, total: usize) {
        tracing::debug!(%tier, total, "tier skipped");
    }

    fn extraction_finished(&self, stopped_at: Option<Tier>, total: usize, used_fallback: bool) {
        let stopped_at = stopped_at.map_or("none", |t| t.name());
        if used_fallback {
            tracing::debug!(stopped_at, total, "no genuine results, using fallback set");
        } else {
            tracing::debug!(stopped_at, total, "extraction finished");
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {}
