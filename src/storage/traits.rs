//! # Storage Traits
//!
//! Seams between the domain services and the flat-file persistence, so the
//! file layer can be swapped without touching the services.

use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::models::expense::Expense;

/// One parsed row of the expense file. The category is still a bare name at
/// this layer; the domain resolves it through the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub description: String,
    pub amount: f64,
    pub category_name: String,
    pub date: NaiveDate,
}

/// Persistence for the expense collection.
pub trait ExpenseStorage: Send + Sync {
    /// Load every well-formed row in file order. A missing file is an
    /// empty store, not an error.
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>>;

    /// Rewrite the whole backing file from the in-memory collection.
    fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
}

/// Persistence for user-added categories.
pub trait CategoryStorage: Send + Sync {
    /// Load persisted category names in file order, blank lines skipped.
    fn load_category_names(&self) -> Result<Vec<String>>;

    /// Append a single name to the category file.
    fn append_category(&self, name: &str) -> Result<()>;
}
