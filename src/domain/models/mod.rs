pub mod category;
pub mod expense;

pub use category::{Category, DEFAULT_CATEGORIES};
pub use expense::Expense;
