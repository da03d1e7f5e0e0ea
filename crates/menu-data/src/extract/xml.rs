//! Extraction from the XML shape of a FamilyMenu response.
//!
//! Elements are matched on local name, so namespace prefixes and default
//! namespaces make no difference. Repeated elements are found by descendant
//! search under their container (`<Days>` then `<Day>`), which tolerates
//! extra wrapper elements. Scalar fields are read from direct children.

use super::SkipStats;
use crate::dates::parse_flexible_date;
use crate::types::{
    CATEGORY_NAME_FIELDS, DAY_DATE_FIELDS, ExtractOptions, MenuItem, RECIPE_NAME_FIELDS,
};
use chrono::NaiveDate;
use roxmltree::{Document, Node};
use tracing::debug;

/// Walk every `FamilyMenuSession` element and collect recipes for the requested meal.
pub fn extract(doc: &Document<'_>, opts: &ExtractOptions) -> Vec<MenuItem> {
    let mut out = Vec::new();
    let mut skipped = SkipStats::default();

    let sessions = doc
        .root()
        .descendants()
        .filter(|n| is_named(n, "FamilyMenuSession"));

    for session in sessions {
        let serving = child_text(session, "ServingSession").unwrap_or("");
        let plans: Vec<Node> = nested(session, "MenuPlans", "MenuPlan").collect();
        let plan_names = plans
            .iter()
            .filter_map(|plan| child_text(*plan, "MenuPlanName"));
        if !opts.session_matches(serving, plan_names) {
            continue;
        }

        for plan in plans {
            for day in nested(plan, "Days", "Day") {
                let Some(date) = day_date(day) else {
                    skipped.days += 1;
                    continue;
                };

                for meal in nested(day, "MenuMeals", "MenuMeal") {
                    for category in nested(meal, "RecipeCategories", "RecipeCategory") {
                        let label = first_child_text(category, CATEGORY_NAME_FIELDS);
                        if !opts.category_matches(label) {
                            continue;
                        }
                        for recipe in nested(category, "Recipes", "Recipe") {
                            match first_child_text(recipe, RECIPE_NAME_FIELDS) {
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
        "XML extraction: {} items, skipped {} days and {} recipes",
        out.len(),
        skipped.days,
        skipped.recipes
    );
    out
}

fn day_date(day: Node<'_, '_>) -> Option<NaiveDate> {
    DAY_DATE_FIELDS
        .iter()
        .filter_map(|name| child_text(day, name))
        .find_map(parse_flexible_date)
}

fn first_child_text<'a>(node: Node<'a, '_>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| child_text(node, name))
}

/// Trimmed, non-empty text of the first direct child element called `name`.
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .filter(|c| is_named(c, name))
        .filter_map(|c| c.text())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Elements called `item` that sit somewhere below a `container` element under `node`.
fn nested<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    container: &'a str,
    item: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants().filter(move |n| {
        is_named(n, item)
            && n.ancestors()
                .skip(1)
                .take_while(|a| *a != node)
                .any(|a| is_named(&a, container))
    })
}

fn is_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
