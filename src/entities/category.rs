//! Category entity - Labels used to group expenses for charts and budgets.
//!
//! Expenses reference categories by id. A reference that does not resolve is
//! reported under [`FALLBACK_CATEGORY_NAME`] instead of failing.

use serde::{Deserialize, Serialize};

/// Label used for expenses whose category reference does not resolve.
pub const FALLBACK_CATEGORY_NAME: &str = "Uncategorized";

/// Category model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display name (e.g., "Food & Dining")
    pub name: String,
    /// Icon reference for the presentation layer
    #[serde(default)]
    pub icon: String,
    /// Display color, usually a hex string
    #[serde(default)]
    pub color: String,
}

impl Category {
    /// Builds a category with the given id and name and no icon or color.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            color: String::new(),
        }
    }
}

/// Looks up a category by id.
#[must_use]
pub fn find_category<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

/// The built-in category set offered when no categories are configured.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    const DEFAULTS: [(&str, &str, &str, &str); 9] = [
        ("food", "Food & Dining", "utensils", "#673AB7"),
        ("shopping", "Shopping", "shopping-bag", "#009688"),
        ("transport", "Transportation", "car", "#FF9800"),
        ("utilities", "Utilities", "zap", "#2196F3"),
        ("entertainment", "Entertainment", "film", "#E91E63"),
        ("health", "Health & Fitness", "heart", "#4CAF50"),
        ("subscriptions", "Subscriptions", "refresh-cw", "#673AB7"),
        ("housing", "Housing", "home", "#009688"),
        ("others", "Others", "more-horizontal", "#FF9800"),
    ];

    DEFAULTS
        .iter()
        .map(|(id, name, icon, color)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            icon: (*icon).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}
