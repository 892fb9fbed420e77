#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that acts as a project root.
///
/// It contains an empty `.git` directory so config discovery never looks
/// above it.
pub fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git");
    dir
}

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Write a markdown document into `dir` and return its path.
pub fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write document");
    path
}
