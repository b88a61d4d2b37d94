//! Expense store domain logic.
use chrono::NaiveDate;
use log::info;

use crate::domain::category_service::CategoryService;
use crate::domain::commands::ExpenseDraft;
use crate::domain::errors::TrackerError;
use crate::domain::models::category::Category;
use crate::domain::models::expense::Expense;
use crate::storage::csv::ExpenseRepository;
use crate::storage::traits::ExpenseStorage;

/// The record store: an owned, insertion-ordered expense collection,
/// rewritten to the expense file after every mutation. The presentation
/// layer re-reads `list()` after each call; the store publishes no change
/// notifications and computes no aggregates.
pub struct ExpenseService {
    expenses: Vec<Expense>,
    repository: ExpenseRepository,
}

impl ExpenseService {
    /// Load the store from its backing file. A missing file is an empty
    /// store. Category names found in the file resolve through the shared
    /// registry, which registers and persists any it has not seen.
    pub fn load(
        repository: ExpenseRepository,
        categories: &mut CategoryService,
    ) -> Result<Self, TrackerError> {
        let mut expenses = Vec::new();
        for record in repository.load_expenses()? {
            let category = categories.find_or_create(&record.category_name)?;
            expenses.push(Expense {
                description: record.description,
                amount: record.amount,
                category,
                date: record.date,
            });
        }
        info!("expense store loaded with {} entry(ies)", expenses.len());
        Ok(Self {
            expenses,
            repository,
        })
    }

    /// Read-only view in insertion order.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Validate the draft, append the expense, rewrite the file. A rejected
    /// draft changes nothing.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<(), TrackerError> {
        let (description, amount, category, date) = validate(draft)?;
        self.expenses.push(Expense {
            description,
            amount,
            category,
            date,
        });
        self.repository.save_expenses(&self.expenses)?;
        Ok(())
    }

    /// Delete the expense at a position from `list()` and rewrite the file.
    pub fn remove(&mut self, index: usize) -> Result<Expense, TrackerError> {
        if index >= self.expenses.len() {
            return Err(TrackerError::ExpenseNotFound(index));
        }
        let removed = self.expenses.remove(index);
        self.repository.save_expenses(&self.expenses)?;
        Ok(removed)
    }

    /// Same validation as `add`, then mutate the addressed expense in
    /// place. Its position in the collection is unchanged.
    pub fn edit(&mut self, index: usize, draft: ExpenseDraft) -> Result<(), TrackerError> {
        if index >= self.expenses.len() {
            return Err(TrackerError::ExpenseNotFound(index));
        }
        let (description, amount, category, date) = validate(draft)?;
        let expense = &mut self.expenses[index];
        expense.description = description;
        expense.amount = amount;
        expense.category = category;
        expense.date = date;
        self.repository.save_expenses(&self.expenses)?;
        Ok(())
    }
}

/// Field checks shared by add and edit: every field present, amount text
/// numeric. Runs before any state change.
fn validate(draft: ExpenseDraft) -> Result<(String, f64, Category, NaiveDate), TrackerError> {
    let ExpenseDraft {
        description,
        amount_text,
        category,
        date,
    } = draft;

    if description.is_empty() {
        return Err(TrackerError::MissingField("description"));
    }
    if amount_text.is_empty() {
        return Err(TrackerError::MissingField("amount"));
    }
    let category = category.ok_or(TrackerError::MissingField("category"))?;
    let date = date.ok_or(TrackerError::MissingField("date"))?;
    let amount = amount_text
        .trim()
        .parse::<f64>()
        .map_err(|_| TrackerError::InvalidAmount(amount_text))?;
    Ok((description, amount, category, date))
}
