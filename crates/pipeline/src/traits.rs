//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable
//! filters to be applied to extracted menu items.

use crate::context::MenuContext;
use anyhow::Result;
use menu_data::MenuItem;

/// Core trait for filtering menu items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters take ownership of the items and return the ones they keep, so a
/// filter may also reorder.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of items.
    ///
    /// # Arguments
    /// * `items` - The items to filter (takes ownership)
    /// * `context` - Requested dates and exclusion set
    fn apply(&self, items: Vec<MenuItem>, context: &MenuContext) -> Result<Vec<MenuItem>>;
}
