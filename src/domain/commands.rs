//! Command structs carrying raw form input into the domain layer.
use chrono::NaiveDate;

use crate::domain::models::category::Category;

/// Input for creating or editing an expense, exactly as the presentation
/// layer collected it: unparsed amount text, plus the category and date the
/// form resolved (`None` when the field was left blank).
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount_text: String,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}
