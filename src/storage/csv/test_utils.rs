/// Test utilities for the flat-file storage layer.
///
/// RAII-based cleanup: the temporary data directory is removed when the
/// environment is dropped, even if the test panics.
use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;

/// A temporary data directory plus a connection over it.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}
