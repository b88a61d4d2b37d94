//! Domain model for a recorded expense.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single recorded spending transaction. Mutable in place; the store
/// allows duplicates and keeps insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}
