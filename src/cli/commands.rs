//! Command dispatch for the CLI.
//!
//! This is the presentation layer: it resolves raw input the way the
//! original form did (category picked from the registry, date parsed up
//! front), re-queries the store after each mutation, and computes the
//! display aggregates itself.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, NaiveDate};

use trackit::domain::commands::ExpenseDraft;
use trackit::domain::models::Expense;
use trackit::Tracker;

use crate::cli::args::{Cli, Commands};

pub fn execute_command(cli: &Cli) -> Result<()> {
    let mut tracker = match &cli.data_dir {
        Some(dir) => Tracker::with_data_dir(dir)?,
        None => Tracker::new()?,
    };

    match &cli.command {
        Commands::List => list(&tracker),
        Commands::Add {
            description,
            amount,
            category,
            date,
        } => add(&mut tracker, description, amount, category, date),
        Commands::Remove { index } => remove(&mut tracker, *index),
        Commands::Edit {
            index,
            description,
            amount,
            category,
            date,
        } => edit(&mut tracker, *index, description, amount, category, date),
        Commands::Categories => categories(&tracker),
        Commands::AddCategory { name } => add_category(&mut tracker, name),
        Commands::Summary => summary(&tracker),
    }
}

fn list(tracker: &Tracker) -> Result<()> {
    let expenses = tracker.expenses.list();
    if expenses.is_empty() {
        println!("No expenses added yet");
        return Ok(());
    }
    println!(
        "{:<4} {:<30} {:>10}  {:<15} {}",
        "#", "Description", "Amount", "Category", "Date"
    );
    for (index, expense) in expenses.iter().enumerate() {
        println!(
            "{:<4} {:<30} {:>10.2}  {:<15} {}",
            index, expense.description, expense.amount, expense.category.name, expense.date
        );
    }
    Ok(())
}

fn add(
    tracker: &mut Tracker,
    description: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> Result<()> {
    let draft = resolve_draft(tracker, description, amount, category, date)?;
    tracker.expenses.add(draft)?;
    println!("Recorded. {} expense(s) on file.", tracker.expenses.list().len());
    Ok(())
}

fn remove(tracker: &mut Tracker, index: usize) -> Result<()> {
    let removed = tracker.expenses.remove(index)?;
    println!(
        "Removed {:?}. {} expense(s) on file.",
        removed.description,
        tracker.expenses.list().len()
    );
    Ok(())
}

fn edit(
    tracker: &mut Tracker,
    index: usize,
    description: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> Result<()> {
    let draft = resolve_draft(tracker, description, amount, category, date)?;
    tracker.expenses.edit(index, draft)?;
    println!("Updated expense {}.", index);
    Ok(())
}

fn categories(tracker: &Tracker) -> Result<()> {
    for category in tracker.categories.list_categories() {
        println!("{}", category.name);
    }
    Ok(())
}

fn add_category(tracker: &mut Tracker, name: &str) -> Result<()> {
    let category = tracker.categories.add_category(name)?;
    println!("Registered category {:?}.", category.name);
    Ok(())
}

fn summary(tracker: &Tracker) -> Result<()> {
    let today = Local::now().date_naive();
    let (total, by_category) = month_summary(tracker.expenses.list(), today.year(), today.month());

    println!(
        "Total expenses for {}: ${:.2}",
        today.format("%B %Y"),
        total
    );
    for (name, amount) in &by_category {
        println!("  {:<15} ${:.2}", name, amount);
    }
    Ok(())
}

/// The aggregates the original window displayed: total spent in the given
/// month, and the same figure broken down per category.
fn month_summary(
    expenses: &[Expense],
    year: i32,
    month: u32,
) -> (f64, BTreeMap<String, f64>) {
    let mut total = 0.0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        if expense.date.year() == year && expense.date.month() == month {
            total += expense.amount;
            *by_category.entry(expense.category.name.clone()).or_insert(0.0) += expense.amount;
        }
    }
    (total, by_category)
}

/// Resolve the raw strings into a draft: the category must already be
/// registered (the form offered a fixed drop-down), the date must parse.
fn resolve_draft(
    tracker: &Tracker,
    description: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> Result<ExpenseDraft> {
    let category = tracker
        .categories
        .list_categories()
        .iter()
        .find(|c| c.name == category)
        .cloned()
        .ok_or_else(|| {
            anyhow!(
                "unknown category {:?}; register it with add-category first",
                category
            )
        })?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid date {:?}, expected yyyy-mm-dd", date))?;
    Ok(ExpenseDraft {
        description: description.to_string(),
        amount_text: amount.to_string(),
        category: Some(category),
        date: Some(date),
    })
}
