use anyhow::{Context, Result};
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;

use super::connection::CsvConnection;
use crate::storage::traits::CategoryStorage;

/// Append-only category file, one name per line. Only user-added categories
/// land here; the five defaults are re-seeded by the registry on every
/// start and never written.
#[derive(Clone)]
pub struct CategoryRepository {
    connection: CsvConnection,
}

impl CategoryRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

impl CategoryStorage for CategoryRepository {
    fn load_category_names(&self) -> Result<Vec<String>> {
        let file_path = self.connection.categories_file_path();
        if !file_path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read {}", file_path.display()))?;
        let names: Vec<String> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        info!("loaded {} category name(s) from {}", names.len(), file_path.display());
        Ok(names)
    }

    fn append_category(&self, name: &str) -> Result<()> {
        let file_path = self.connection.categories_file_path();
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&file_path)
            .with_context(|| format!("failed to open {}", file_path.display()))?;
        writeln!(file, "{}", name)
            .with_context(|| format!("failed to write {}", file_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    fn setup() -> Result<(CategoryRepository, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        let repo = CategoryRepository::new(env.connection.clone());
        Ok((repo, env))
    }

    #[test]
    fn missing_file_yields_no_names() -> Result<()> {
        let (repo, _env) = setup()?;
        assert!(repo.load_category_names()?.is_empty());
        Ok(())
    }

    #[test]
    fn appended_names_come_back_in_order() -> Result<()> {
        let (repo, _env) = setup()?;
        repo.append_category("Books")?;
        repo.append_category("Travel")?;
        assert_eq!(repo.load_category_names()?, vec!["Books", "Travel"]);
        Ok(())
    }

    #[test]
    fn blank_lines_are_skipped() -> Result<()> {
        let (repo, env) = setup()?;
        fs::write(env.connection.categories_file_path(), "Books\n\n  \nTravel\n")?;
        assert_eq!(repo.load_category_names()?, vec!["Books", "Travel"]);
        Ok(())
    }
}
