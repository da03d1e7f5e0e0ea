//! Extraction from the JSON shape of a FamilyMenu response.

use super::SkipStats;
use crate::dates::parse_flexible_date;
use crate::types::{
    CATEGORY_NAME_FIELDS, DAY_DATE_FIELDS, ExtractOptions, MenuItem, RECIPE_NAME_FIELDS,
};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

/// Walk `FamilyMenuSessions` and collect recipes for the requested meal.
pub fn extract(data: &Value, opts: &ExtractOptions) -> Vec<MenuItem> {
    let mut out = Vec::new();
    let mut skipped = SkipStats::default();

    for session in array(data, "FamilyMenuSessions") {
        let serving = str_field(session, "ServingSession").unwrap_or("");
        let plans = array(session, "MenuPlans");
        let plan_names = plans
            .iter()
            .map(|plan| str_field(plan, "MenuPlanName").unwrap_or(""));
        if !opts.session_matches(serving, plan_names) {
            continue;
        }

        for plan in plans {
            for day in array(plan, "Days") {
                let Some(date) = day_date(day) else {
                    skipped.days += 1;
                    continue;
                };

                for meal in array(day, "MenuMeals") {
                    for category in array(meal, "RecipeCategories") {
                        let label = first_non_empty(category, CATEGORY_NAME_FIELDS);
                        if !opts.category_matches(label) {
                            continue;
                        }
                        for recipe in array(category, "Recipes") {
                            match first_non_empty(recipe, RECIPE_NAME_FIELDS) {
                                Some(name) => {
                                    let mut item = MenuItem::new(date, name);
                                    item.category = label.map(str::to_string);
                                    out.push(item);
                                }
                                None => skipped.recipes += 1,
                            }
                        }
                    }
                }
            }
        }
    }

    debug!(
        "JSON extraction: {} items, skipped {} days and {} recipes",
        out.len(),
        skipped.days,
        skipped.recipes
    );
    out
}

/// First date alias whose value parses.
fn day_date(day: &Value) -> Option<NaiveDate> {
    DAY_DATE_FIELDS
        .iter()
        .filter_map(|key| str_field(day, key))
        .find_map(parse_flexible_date)
}

/// First alias holding a non-blank string, trimmed.
fn first_non_empty<'v>(node: &'v Value, keys: &[&str]) -> Option<&'v str> {
    keys.iter()
        .filter_map(|key| str_field(node, key))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

fn str_field<'v>(node: &'v Value, key: &str) -> Option<&'v str> {
    node.get(key).and_then(Value::as_str)
}

/// Array under `key`, or nothing when the field is absent, null or not an array.
fn array<'v>(node: &'v Value, key: &str) -> &'v [Value] {
    node.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
