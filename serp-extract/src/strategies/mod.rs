//! Extraction strategy implementations.
//!
//! Each module provides a struct implementing [`crate::strategy::Strategy`]
//! for one tier of the cascade. [`cascade`] assembles them in priority
//! order, most specific first.

pub mod container;
pub mod heading;
pub mod link_harvest;
pub mod link_scan;
pub mod markup;

pub use container::ContainerStrategy;
pub use heading::HeadingStrategy;
pub use link_harvest::LinkHarvestStrategy;
pub use link_scan::LinkScanStrategy;

use crate::config::ExtractConfig;
use crate::strategy::Strategy;

/// Build the four tiers in priority order.
pub fn cascade(config: &ExtractConfig) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(ContainerStrategy::new(config)),
        Box::new(HeadingStrategy::new(config)),
        Box::new(LinkScanStrategy::new(config)),
        Box::new(LinkHarvestStrategy::new(config)),
    ]
}
