//! Category Helpers

use crate::models::Category;

pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// Preferred category for new goals: "General" if present, else the first one.
pub fn default_category_id(categories: &[Category]) -> Option<u32> {
    categories
        .iter()
        .find(|c| c.name == DEFAULT_CATEGORY_NAME)
        .or_else(|| categories.first())
        .map(|c| c.id)
}

/// Category for the creation form after a reload: the current choice while it
/// still exists, else the default.
pub fn reconcile_selection(selected: Option<u32>, categories: &[Category]) -> Option<u32> {
    match selected {
        Some(id) if categories.iter().any(|c| c.id == id) => Some(id),
        _ => default_category_id(categories),
    }
}

pub fn needs_reassignment_warning(count: u32) -> bool {
    count > 0
}

/// Confirmation text shown before deleting a category
pub fn delete_prompt(count: u32) -> String {
    if needs_reassignment_warning(count) {
        format!(
            "This category is used by {} goal{}. Deleting it makes them 'Uncategorized'. Proceed?",
            count,
            if count == 1 { "" } else { "s" }
        )
    } else {
        "Delete this category?".to_string()
    }
}
