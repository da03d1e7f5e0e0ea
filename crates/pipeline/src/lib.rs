//! Pipeline for filtering and aggregating extracted menu items.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing the extracted items
//! - FilterPipeline for composing filters
//! - `aggregate` for the per-day kept/excluded report
//!
//! ## Architecture
//! Items flow through the pipeline in stages:
//! 1. Filters drop items outside the requested dates and repeated names
//! 2. The aggregator groups what is left by day
//! 3. Each day's names are split by the exclusion set
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, MenuContext, ExclusionSet, aggregate};
//! use pipeline::filters::*;
//!
//! let context = MenuContext::new(range, ExclusionSet::district_default());
//! let pipeline = FilterPipeline::new()
//!     .add_filter(RequestedDatesFilter)
//!     .add_filter(DedupeFilter);
//!
//! let filtered = pipeline.apply(items, &context)?;
//! let report = aggregate(filtered, &context);
//! ```

pub mod aggregate;
pub mod context;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use aggregate::{DayMenu, MenuReport, aggregate, build_report};
pub use context::{DEFAULT_EXCLUSIONS, ExclusionSet, MenuContext};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
