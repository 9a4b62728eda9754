//! Test utilities for creating temporary documentation trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary documentation directory for testing.
///
/// Provides methods for creating markdown pages and subdirectories. The
/// directory is automatically cleaned up when dropped.
pub struct TestDocs {
    dir: TempDir,
}

impl TestDocs {
    /// Create a new empty temporary docs root.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the docs root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file under the docs root.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty subdirectory under the docs root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDocs {
    fn default() -> Self {
        Self::new()
    }
}
