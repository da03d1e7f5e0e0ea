//! Run-wide inputs shared by every filter: the requested dates and the
//! exclusion set.

use menu_data::DateRange;
use std::collections::HashSet;

/// Recipes the district's report always leaves out.
///
/// Matched case-insensitively and exactly.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "Diced Peach Cup",
    "Diced Tomato & Lettuce",
    "Fat Free Chocolate Milk",
    "Fresh Gala Apples",
    "Fresh Peach",
    "Ham Chef Salad HS",
    "Housemade Italian Dressing",
    "Lowfat 1% Milk",
    "Mandarin oranges",
    "Ranch Dressing",
    "Salsa",
    "Strawberry Milk",
    "Street Corn",
    "Taco Salad",
    "Veggie Chef Salad",
    "Veggie Chef Salad HS",
    "Yogurt Plate w/Mozz Stick",
    "Chilled Peaches",
    "Chicken Caesar Salad",
    "Caesar Dressing",
    "Coleslaw",
    "Comeback Sauce",
    "Fresh Green Pears",
    "Ketchup",
    "Mustard",
    "PBJ Plate w/Mozz Stick",
    "Roasted Red Potatoes",
    "Steamed Mixed Veggies",
    "Fresh Bananas",
    "Mayonnaise",
    "Oven Baked French Fries",
    "Pineapple Tidbits",
    "Sunflower Seeds",
    "Veggie Burger",
    "Veggie Burger on Bun",
    "Tomato Cucumber Salad",
];

/// Names to move out of the main report.
///
/// Exact names are compared case-insensitively. Ignore patterns are
/// case-insensitive substrings; a name containing one is excluded too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
    patterns: Vec<String>,
}

impl ExclusionSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .collect(),
            patterns: Vec::new(),
        }
    }

    /// The district's fixed list.
    pub fn district_default() -> Self {
        Self::from_names(DEFAULT_EXCLUSIONS)
    }

    /// Add substring patterns; blank patterns are dropped so they cannot match everything.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns.extend(
            patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty()),
        );
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        let lower = name.trim().to_lowercase();
        self.names.contains(&lower) || self.patterns.iter().any(|p| lower.contains(p.as_str()))
    }

    /// Number of distinct exact names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.patterns.is_empty()
    }
}

/// Everything the filters and the aggregator need to know about a run.
#[derive(Debug, Clone)]
pub struct MenuContext {
    pub dates: DateRange,
    pub exclusions: ExclusionSet,
}

impl MenuContext {
    pub fn new(dates: DateRange, exclusions: ExclusionSet) -> Self {
        Self { dates, exclusions }
    }
}
