//! Filter to drop items dated outside the requested range.
//!
//! The API is queried from the first to the last requested date, so with
//! weekend skipping the response can still carry Saturday and Sunday menus.

use crate::context::MenuContext;
use crate::traits::Filter;
use anyhow::Result;
use menu_data::MenuItem;

/// Keeps only items whose date is one of the requested dates.
pub struct RequestedDatesFilter;

impl Filter for RequestedDatesFilter {
    fn name(&self) -> &str {
        "RequestedDatesFilter"
    }

    fn apply(&self, items: Vec<MenuItem>, context: &MenuContext) -> Result<Vec<MenuItem>> {
        let filtered: Vec<MenuItem> = items
            .into_iter()
            .filter(|item| context.dates.contains(&item.date))
            .collect();
        Ok(filtered)
    }
}
