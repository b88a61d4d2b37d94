//! # TrackIt core
//!
//! Single-user expense tracker backend: an in-memory record store mirrored
//! to `expenses.csv` on every mutation, plus a category registry persisted
//! to `categories.csv`. Everything is synchronous and single-threaded; one
//! process, one actor, one file rewrite per mutation.
//!
//! The presentation layer (the CLI in this repo) re-reads [`list`] after
//! each mutation and computes its own aggregates; the core publishes no
//! change notifications.
//!
//! [`list`]: domain::ExpenseService::list

pub mod domain;
pub mod storage;

use std::path::Path;

use domain::{CategoryService, ExpenseService, TrackerError};
use storage::csv::{CategoryRepository, CsvConnection, ExpenseRepository};

/// Wires the connection and the two services over one data directory.
pub struct Tracker {
    pub expenses: ExpenseService,
    pub categories: CategoryService,
}

impl Tracker {
    /// Tracker over the working directory, where the files have always
    /// lived.
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_connection(CsvConnection::new_default()?)
    }

    /// Tracker over an explicit data directory.
    pub fn with_data_dir<P: AsRef<Path>>(path: P) -> Result<Self, TrackerError> {
        Self::with_connection(CsvConnection::new(path)?)
    }

    fn with_connection(connection: CsvConnection) -> Result<Self, TrackerError> {
        // Categories load first so expense rows can resolve their names
        // through the shared registry.
        let mut categories =
            CategoryService::load(CategoryRepository::new(connection.clone()))?;
        let expenses =
            ExpenseService::load(ExpenseRepository::new(connection), &mut categories)?;
        Ok(Self {
            expenses,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::ExpenseDraft;
    use crate::domain::models::Category;
    use anyhow::Result;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn tracker_persists_across_instances() -> Result<()> {
        let dir = TempDir::new()?;

        let mut tracker = Tracker::with_data_dir(dir.path())?;
        assert!(tracker.expenses.list().is_empty());
        tracker.expenses.add(ExpenseDraft {
            description: "Coffee".to_string(),
            amount_text: "3.50".to_string(),
            category: Some(Category::new("Food")),
            date: NaiveDate::from_ymd_opt(2024, 1, 5),
        })?;
        drop(tracker);

        let reopened = Tracker::with_data_dir(dir.path())?;
        assert_eq!(reopened.expenses.list().len(), 1);
        assert_eq!(reopened.expenses.list()[0].description, "Coffee");
        Ok(())
    }
}
