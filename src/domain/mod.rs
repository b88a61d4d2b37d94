//! Domain layer: models, command structs, and the two services the
//! presentation layer drives.

pub mod category_service;
pub mod commands;
pub mod errors;
pub mod expense_service;
pub mod models;

pub use category_service::CategoryService;
pub use errors::TrackerError;
pub use expense_service::ExpenseService;
