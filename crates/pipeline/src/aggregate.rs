//! Per-day grouping and the kept/excluded split.

use crate::context::MenuContext;
use crate::filter_pipeline::FilterPipeline;
use anyhow::Result;
use chrono::NaiveDate;
use menu_data::MenuItem;
use std::collections::{BTreeMap, HashSet};
use tracing::info;

/// Menu for one requested date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMenu {
    pub date: NaiveDate,
    /// Names to report, in pipeline order
    pub kept: Vec<String>,
    /// Names matched by the exclusion set, in pipeline order
    pub excluded: Vec<String>,
}

impl DayMenu {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            kept: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Excluded names deduplicated and sorted, both ignoring case.
    pub fn excluded_sorted(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names: Vec<String> = self
            .excluded
            .iter()
            .filter(|name| seen.insert(name.to_lowercase()))
            .cloned()
            .collect();
        names.sort_by_cached_key(|name| name.to_lowercase());
        names
    }
}

/// One `DayMenu` for every requested date, in date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuReport {
    pub days: Vec<DayMenu>,
}

impl MenuReport {
    pub fn total_kept(&self) -> usize {
        self.days.iter().map(|d| d.kept.len()).sum()
    }

    pub fn total_excluded(&self) -> usize {
        self.days.iter().map(|d| d.excluded.len()).sum()
    }

    pub fn kept_map(&self) -> BTreeMap<NaiveDate, Vec<String>> {
        self.days.iter().map(|d| (d.date, d.kept.clone())).collect()
    }

    pub fn excluded_map(&self) -> BTreeMap<NaiveDate, Vec<String>> {
        self.days
            .iter()
            .map(|d| (d.date, d.excluded.clone()))
            .collect()
    }
}

/// Group items by requested date and split each day by the exclusion set.
///
/// Every requested date gets an entry, empty or not. Items dated outside the
/// range are dropped. Order within a day follows the input order, so run the
/// standard pipeline first to get sorted, deduplicated days.
pub fn aggregate(items: Vec<MenuItem>, context: &MenuContext) -> MenuReport {
    let mut days: BTreeMap<NaiveDate, DayMenu> = context
        .dates
        .iter()
        .map(|date| (*date, DayMenu::new(*date)))
        .collect();

    for item in items {
        let Some(day) = days.get_mut(&item.date) else {
            continue;
        };
        if context.exclusions.is_excluded(&item.name) {
            day.excluded.push(item.name);
        } else {
            day.kept.push(item.name);
        }
    }

    MenuReport {
        days: days.into_values().collect(),
    }
}

/// Run the standard pipeline over extracted items and aggregate the result.
pub fn build_report(items: Vec<MenuItem>, context: &MenuContext) -> Result<MenuReport> {
    let extracted = items.len();
    let filtered = FilterPipeline::standard().apply(items, context)?;
    let report = aggregate(filtered, context);
    info!(
        "Extracted {} items: {} kept, {} excluded across {} days",
        extracted,
        report.total_kept(),
        report.total_excluded(),
        report.days.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExclusionSet;
    use menu_data::DateRange;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_requested_date_present() {
        let context = MenuContext::new(
            DateRange::build(date(2024, 3, 4), 3, false).unwrap(),
            ExclusionSet::district_default(),
        );
        let report = aggregate(Vec::new(), &context);

        assert_eq!(report.days.len(), 3);
        assert_eq!(report.kept_map().len(), 3);
        assert_eq!(report.excluded_map().len(), 3);
        assert!(report.kept_map().values().all(Vec::is_empty));
        assert_eq!(report.total_kept(), 0);
    }

    #[test]
    fn test_partition_by_exclusion_set() {
        let monday = date(2024, 3, 4);
        let context = MenuContext::new(
            DateRange::build(monday, 1, false).unwrap(),
            ExclusionSet::district_default().with_patterns(["soup"]),
        );
        let items = vec![
            MenuItem::new(monday, "Pizza"),
            MenuItem::new(monday, "SALSA"),
            MenuItem::new(monday, "Tomato Soup"),
            MenuItem::new(date(2024, 3, 5), "Tacos"),
        ];

        let report = aggregate(items, &context);
        assert_eq!(report.days[0].kept, vec!["Pizza"]);
        assert_eq!(report.days[0].excluded, vec!["SALSA", "Tomato Soup"]);
    }

    #[test]
    fn test_excluded_sorted() {
        let mut day = DayMenu::new(date(2024, 3, 4));
        day.excluded = vec![
            "ketchup".to_string(),
            "Coleslaw".to_string(),
            "Ketchup".to_string(),
        ];
        assert_eq!(day.excluded_sorted(), vec!["Coleslaw", "ketchup"]);
    }
}
