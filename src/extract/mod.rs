//!
//! Extraction strategies built on top of [`CommentWalker`](crate::walker::CommentWalker).
//!
//! - [`SingleExtractor`] concatenates every accepted block into one string.
//! - [`MultiExtractor`] routes accepted blocks to files named by their
//!   `file=<path>` tag, appending blocks that share a path.

pub mod multi;
pub mod single;

pub use multi::{FileMap, MultiExtractor, merge_file_maps};
pub use single::SingleExtractor;

use crate::filter::TagFilter;
use crate::walker::CommentWalker;
use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced while loading a document for extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The input could not be read (missing, unreadable, or a directory).
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// Everything that decides which blocks an extractor emits.
///
/// Built once and never mutated while a walk is running; extractors can be
/// shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub filter: TagFilter,
    pub include_comments: bool,
    /// `None` unwraps comments however deeply they nest.
    pub max_comment_depth: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            filter: TagFilter::default(),
            include_comments: true,
            max_comment_depth: None,
        }
    }
}

impl ExtractOptions {
    pub fn with_filter(filter: TagFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub(crate) fn walker(&self) -> CommentWalker {
        CommentWalker::new(self.include_comments, self.max_comment_depth)
    }
}

/// Read a Markdown document. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            log::debug!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
