//! # CSV Storage Module
//!
//! Flat-file persistence for the tracker. Every mutation of the expense
//! store rewrites `expenses.csv` in full; the category registry appends to
//! `categories.csv`.
//!
//! ## File formats
//!
//! `expenses.csv` — one unquoted record per expense, no header:
//!
//! ```csv
//! Coffee,3.5,Food,2024-01-05
//! Bus ticket,2.75,Transport,2024-01-06
//! ```
//!
//! `categories.csv` — one category name per line, append-only. The five
//! default categories are never written.

pub mod category_repository;
pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use category_repository::CategoryRepository;
pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
