//! Storage layer: trait seams and the flat-file implementation.

pub mod csv;
pub mod traits;

pub use traits::{CategoryStorage, ExpenseRecord, ExpenseStorage};
