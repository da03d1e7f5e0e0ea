//! Filter implementations for the menu pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod dedupe;
pub mod requested_dates;

// Re-export for convenience
pub use dedupe::DedupeFilter;
pub use requested_dates::RequestedDatesFilter;
