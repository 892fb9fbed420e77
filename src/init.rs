//!
//! This module provides initialization utilities for mdextract, such as creating default configuration files.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for initialization operations
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to access file {path}: {source}")]
    IoError { source: io::Error, path: String },
}

pub const DEFAULT_CONFIG: &str = r#"# mdextract configuration file

[filter]
# Only extract code blocks carrying all of these tags
# tags = ["ci"]

# Skip code blocks carrying any of these tags (wins over `tags`)
# exclude-tags = ["noci"]

# Do not look for code blocks hidden inside HTML comments
exclude-comments = false

# Stop unwrapping HTML comments nested deeper than this (unlimited by default)
# max-comment-depth = 256

[output]
# Permission bits for files created by `mdextract multi` and `--output`
file-mode = "0600"

# What to do with files that already exist: append, truncate or create-new
write-mode = "append"
"#;

/// Create a default configuration file at the specified path.
///
/// Returns `true` if the file was written, or `false` if it already exists
/// and `force` is not set.
///
/// # Errors
///
/// Returns an error if the file cannot be created due to permissions or other I/O errors.
pub fn create_default_config(path: &Path, force: bool) -> Result<bool, InitError> {
    if path.exists() && !force {
        return Ok(false);
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| InitError::IoError {
        source,
        path: path.display().to_string(),
    })?;

    Ok(true)
}
