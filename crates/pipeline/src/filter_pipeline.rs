//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::context::MenuContext;
use crate::filters::{DedupeFilter, RequestedDatesFilter};
use crate::traits::Filter;
use anyhow::Result;
use menu_data::MenuItem;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(RequestedDatesFilter)
///     .add_filter(DedupeFilter);
///
/// let filtered = pipeline.apply(items, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline every run uses: requested dates only, then per-day dedupe.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(RequestedDatesFilter)
            .add_filter(DedupeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the items.
    ///
    /// # Returns
    /// * `Ok(Vec<MenuItem>)` - The items left after all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, items: Vec<MenuItem>, context: &MenuContext) -> Result<Vec<MenuItem>> {
        let mut current = items;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
