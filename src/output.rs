//!
//! Writers that persist extraction results.
//!
//! Single-stream results go to stdout or one file; multi-file results go to
//! one file per mapping key. The [`WritePolicy`] decides what happens to files
//! that already exist; [`FileMode`] supplies the permission bits for files
//! that are created.

use crate::extract::FileMap;
use crate::types::{FileMode, WritePolicy};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Destination of a single-stream extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

fn open_options(policy: WritePolicy, mode: FileMode) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true);
    match policy {
        WritePolicy::Append => {
            options.append(true).create(true);
        }
        WritePolicy::Truncate => {
            options.truncate(true).create(true);
        }
        WritePolicy::CreateNew => {
            options.create_new(true);
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode.bits());
    }
    #[cfg(not(unix))]
    let _ = mode;

    options
}

fn open(path: &Path, policy: WritePolicy, mode: FileMode) -> io::Result<File> {
    open_options(policy, mode).open(path)
}

/// Write `content` to a single file using `policy`.
pub fn write_file(path: &Path, content: &str, policy: WritePolicy, mode: FileMode) -> Result<(), OutputError> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = open(path, policy, mode).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)
}

/// Write a single-stream result to stdout or a file.
pub fn write_single(
    target: &OutputTarget,
    content: &str,
    policy: WritePolicy,
    mode: FileMode,
) -> Result<(), OutputError> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes()).map_err(OutputError::Stdout)?;
            stdout.flush().map_err(OutputError::Stdout)
        }
        OutputTarget::File(path) => write_file(path, content, policy, mode),
    }
}

/// Write each entry of a multi-file result, creating parent directories.
///
/// Stops at the first failure. Files written before it are left in place.
/// Returns the number of files written.
pub fn write_file_map(files: &FileMap, policy: WritePolicy, mode: FileMode) -> Result<usize, OutputError> {
    let mut written = 0;

    for (file, content) in files {
        let path = Path::new(file);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| OutputError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        log::debug!("Writing {} bytes to {file} ({policy})", content.len());
        write_file(path, content, policy, mode)?;
        written += 1;
    }

    Ok(written)
}
