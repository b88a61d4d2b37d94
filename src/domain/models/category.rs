//! Domain model for a category label.
use serde::{Deserialize, Serialize};

/// Category names seeded into the registry on every start. They are never
/// written to the category file; only user-added categories persist.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Food", "Transport", "Utilities", "Entertainment", "Other"];

/// A named grouping label applied to expenses. Identity is by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
