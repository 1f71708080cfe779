//! Temporary dotenv files for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A `.env` file written into a per-test temporary directory
pub struct DotenvGuard {
  /// The temporary directory holding the file
  pub temp_dir: TempDir,
  path: PathBuf,
}

impl DotenvGuard {
  /// Write `content` to `<tempdir>/.env`
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(".env");
    fs::write(&path, content).expect("Failed to write .env file");

    Self { temp_dir, path }
  }

  /// Path to the `.env` file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Directory containing the `.env` file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
