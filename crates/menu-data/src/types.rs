//! Core domain types for school menu data.
//!
//! - `MenuItem`: one recipe occurrence pulled out of a menu document
//! - `ExtractOptions`: what the extractors should look for
//! - Field alias tables shared by the JSON and XML extractors

use chrono::NaiveDate;

// =============================================================================
// Menu Items
// =============================================================================

/// A single (date, recipe) pair found in a menu document.
///
/// Items come straight from extraction and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub date: NaiveDate,
    pub name: String,
    /// Label of the recipe category the item was listed under, if any
    pub category: Option<String>,
}

impl MenuItem {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

// =============================================================================
// Extraction Options
// =============================================================================

/// Selects which parts of a menu document are extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Serving session to match, e.g. "Lunch"
    pub meal: String,
    /// Optional recipe category substring, e.g. "Main Entree"
    pub category: Option<String>,
}

impl ExtractOptions {
    pub fn new(meal: impl Into<String>) -> Self {
        Self {
            meal: meal.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// A session is relevant when its label equals the meal, or when any of
    /// its plan names contains the meal. Both checks ignore case.
    pub fn session_matches<'a>(
        &self,
        serving_session: &str,
        plan_names: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        let meal = self.meal.trim().to_lowercase();
        if serving_session.trim().to_lowercase() == meal {
            return true;
        }
        plan_names
            .into_iter()
            .any(|name| name.to_lowercase().contains(&meal))
    }

    /// Whether recipes under a category with this label should be kept.
    pub fn category_matches(&self, label: Option<&str>) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => label
                .map(|l| l.to_lowercase().contains(&wanted.to_lowercase()))
                .unwrap_or(false),
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new("Lunch")
    }
}

// =============================================================================
// Field Aliases
// =============================================================================
// Upstream populates these fields inconsistently; each list is tried in order.

/// Field names that may carry the date of a menu day
pub const DAY_DATE_FIELDS: &[&str] = &["Date", "ServiceDate", "MenuDate", "date"];

/// Field names that may carry a recipe's display name
pub const RECIPE_NAME_FIELDS: &[&str] = &["RecipeName", "DisplayName", "ItemName", "Name"];

/// Field names that may carry a recipe category's label
pub const CATEGORY_NAME_FIELDS: &[&str] =
    &["RecipeCategoryName", "CategoryName", "Name", "DisplayName"];
