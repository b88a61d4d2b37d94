use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the expense store, relative to the data directory.
pub const EXPENSES_FILE: &str = "expenses.csv";
/// File name of the category registry, relative to the data directory.
pub const CATEGORIES_FILE: &str = "categories.csv";

/// CsvConnection owns the data directory and hands out the paths of the two
/// backing files.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection over a data directory, creating the directory if
    /// it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }
        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Connection over the working directory, where the files have always
    /// lived.
    pub fn new_default() -> Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join(EXPENSES_FILE)
    }

    pub fn categories_file_path(&self) -> PathBuf {
        self.base_directory.join(CATEGORIES_FILE)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}
