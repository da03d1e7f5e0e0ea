//! Filter to remove repeated recipe names within a day.
//!
//! The same recipe often shows up under several plans or meals.

use crate::context::MenuContext;
use crate::traits::Filter;
use anyhow::Result;
use chrono::NaiveDate;
use menu_data::MenuItem;
use std::collections::HashSet;

/// Sorts by (date, lower-cased name) and keeps the first occurrence of
/// each case-insensitive name per date.
///
/// The sort is stable, so among names equal ignoring case the one
/// extracted first wins.
pub struct DedupeFilter;

impl Filter for DedupeFilter {
    fn name(&self) -> &str {
        "DedupeFilter"
    }

    fn apply(&self, mut items: Vec<MenuItem>, _context: &MenuContext) -> Result<Vec<MenuItem>> {
        items.sort_by_cached_key(|item| (item.date, item.name.to_lowercase()));

        let mut seen: HashSet<(NaiveDate, String)> = HashSet::new();
        let filtered: Vec<MenuItem> = items
            .into_iter()
            .filter(|item| seen.insert((item.date, item.name.to_lowercase())))
            .collect();
        Ok(filtered)
    }
}
