//! Shared helpers for filesystem tests.

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_archive_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Writes `content` to `relative` below the archive, creating directories.
pub fn create_test_file(archive: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = archive.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
