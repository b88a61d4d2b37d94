use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use log::{info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::expense::Expense;
use crate::storage::traits::{ExpenseRecord, ExpenseStorage};

/// Date format used in the expense file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Flat-file expense repository.
///
/// The file carries no header and no quoting: fields are joined with bare
/// commas, so a comma inside a description corrupts that row on reload.
/// That is the format the store has always used; rows that no longer parse
/// are skipped with a warning rather than aborting the load.
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn parse_record(record: &StringRecord) -> Result<ExpenseRecord> {
        if record.len() != 4 {
            return Err(anyhow!("expected 4 fields, got {}", record.len()));
        }
        let amount: f64 = record[1]
            .parse()
            .with_context(|| format!("bad amount {:?}", &record[1]))?;
        let date = NaiveDate::parse_from_str(&record[3], DATE_FORMAT)
            .with_context(|| format!("bad date {:?}", &record[3]))?;
        Ok(ExpenseRecord {
            description: record[0].to_string(),
            amount,
            category_name: record[2].to_string(),
            date,
        })
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        let file_path = self.connection.expenses_file_path();
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("failed to open {}", file_path.display()))?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for (line, result) in csv_reader.records().enumerate() {
            let raw = result
                .with_context(|| format!("failed to read {}", file_path.display()))?;
            match Self::parse_record(&raw) {
                Ok(record) => records.push(record),
                Err(e) => warn!("skipping malformed expense line {}: {:#}", line + 1, e),
            }
        }
        info!("loaded {} expense row(s) from {}", records.len(), file_path.display());
        Ok(records)
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let file_path = self.connection.expenses_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("failed to write {}", file_path.display()))?;

        let mut csv_writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(BufWriter::new(file));

        for expense in expenses {
            let amount = expense.amount.to_string();
            let date = expense.date.format(DATE_FORMAT).to_string();
            csv_writer.write_record([
                expense.description.as_str(),
                amount.as_str(),
                expense.category.name.as_str(),
                date.as_str(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::category::Category;
    use crate::storage::csv::test_utils::TestEnvironment;
    use std::fs;

    fn setup() -> Result<(ExpenseRepository, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        let repo = ExpenseRepository::new(env.connection.clone());
        Ok((repo, env))
    }

    fn expense(description: &str, amount: f64, category: &str, date: &str) -> Expense {
        Expense {
            description: description.to_string(),
            amount,
            category: Category::new(category),
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        }
    }

    #[test]
    fn missing_file_is_an_empty_store() -> Result<()> {
        let (repo, _env) = setup()?;
        assert!(repo.load_expenses()?.is_empty());
        Ok(())
    }

    #[test]
    fn written_file_has_no_header_and_no_quoting() -> Result<()> {
        let (repo, env) = setup()?;
        repo.save_expenses(&[expense("Coffee", 3.50, "Food", "2024-01-05")])?;
        let contents = fs::read_to_string(env.connection.expenses_file_path())?;
        assert_eq!(contents, "Coffee,3.5,Food,2024-01-05\n");
        Ok(())
    }

    #[test]
    fn round_trip_preserves_rows() -> Result<()> {
        let (repo, _env) = setup()?;
        let expenses = vec![
            expense("Coffee", 3.5, "Food", "2024-01-05"),
            expense("Bus ticket", 2.75, "Transport", "2024-01-06"),
            expense("Electricity", 80.0, "Utilities", "2024-02-01"),
        ];
        repo.save_expenses(&expenses)?;

        let loaded = repo.load_expenses()?;
        assert_eq!(loaded.len(), expenses.len());
        for (record, original) in loaded.iter().zip(&expenses) {
            assert_eq!(record.description, original.description);
            assert!((record.amount - original.amount).abs() < 1e-9);
            assert_eq!(record.category_name, original.category.name);
            assert_eq!(record.date, original.date);
        }
        Ok(())
    }

    #[test]
    fn malformed_lines_are_skipped() -> Result<()> {
        let (repo, env) = setup()?;
        fs::write(
            env.connection.expenses_file_path(),
            "Coffee,3.5,Food,2024-01-05\n\
             not a record\n\
             Cake,abc,Food,2024-01-07\n\
             Lunch,9,Food,05/01/2024\n\
             Tea,2,Food,2024-01-06\n",
        )?;
        let loaded = repo.load_expenses()?;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].description, "Coffee");
        assert_eq!(loaded[1].description, "Tea");
        Ok(())
    }

    #[test]
    fn embedded_comma_corrupts_its_row() -> Result<()> {
        // The format has no escaping: the extra comma splits the row into
        // five fields and the row is dropped on reload.
        let (repo, _env) = setup()?;
        repo.save_expenses(&[
            expense("Coffee, large", 4.5, "Food", "2024-01-05"),
            expense("Tea", 2.0, "Food", "2024-01-06"),
        ])?;
        let loaded = repo.load_expenses()?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "Tea");
        Ok(())
    }
}
