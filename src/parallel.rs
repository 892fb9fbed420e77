//! File-level parallel extraction
//!
//! Each input document is walked independently, so several documents can be
//! read and extracted at once. Results always come back in input order.

use crate::extract::ExtractError;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable/disable parallel execution
    pub enabled: bool,
    /// Minimum number of files to enable parallel execution
    pub min_file_count: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_file_count: 2, // At least 2 files to benefit from parallelization
        }
    }
}

/// Runs an extraction over many input files
pub struct FileParallelProcessor {
    config: ParallelConfig,
}

impl FileParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(ParallelConfig::default())
    }

    /// Apply `extract` to every file. The first error (in input order) wins.
    pub fn process_files<T, F>(&self, files: &[PathBuf], extract: F) -> Result<Vec<T>, ExtractError>
    where
        T: Send,
        F: Fn(&Path) -> Result<T, ExtractError> + Sync,
    {
        let timed = |path: &PathBuf| {
            let start = Instant::now();
            let result = extract(path.as_path());
            log::debug!("Extracted {} in {:?}", path.display(), start.elapsed());
            result
        };

        if !self.should_use_parallel(files) {
            return files.iter().map(timed).collect();
        }

        self.process_parallel(files, timed)
    }

    #[cfg(feature = "parallel")]
    fn process_parallel<T, F>(&self, files: &[PathBuf], extract: F) -> Result<Vec<T>, ExtractError>
    where
        T: Send,
        F: Fn(&PathBuf) -> Result<T, ExtractError> + Send + Sync,
    {
        use rayon::prelude::*;

        let results: Vec<Result<T, ExtractError>> = files.par_iter().map(extract).collect();
        results.into_iter().collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn process_parallel<T, F>(&self, files: &[PathBuf], extract: F) -> Result<Vec<T>, ExtractError>
    where
        T: Send,
        F: Fn(&PathBuf) -> Result<T, ExtractError> + Send + Sync,
    {
        files.iter().map(extract).collect()
    }

    /// Determine if file-level parallel processing should be used
    pub fn should_use_parallel(&self, files: &[PathBuf]) -> bool {
        self.config.enabled && files.len() >= self.config.min_file_count
    }
}
