//!
//! This module defines the configuration file format for mdextract and how it is discovered.
//! Command-line flags are applied on top of the loaded [`Config`] by the binary.

use crate::extract::ExtractOptions;
use crate::filter::TagFilter;
use crate::types::{FileMode, WritePolicy};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Config file names, in order of precedence within one directory.
pub const CONFIG_FILES: &[&str] = &[".mdextract.toml", "mdextract.toml"];

/// Upper bound on how many parent directories discovery will visit.
const MAX_DISCOVERY_DEPTH: usize = 100;

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    Io { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config file at {path}: {message}")]
    Parse { path: String, message: String },
}

/// Represents the complete configuration loaded from .mdextract.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Which code blocks are extracted
    pub filter: FilterConfig,

    /// How results are written
    pub output: OutputConfig,
}

/// The `[filter]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilterConfig {
    /// Tags a block must carry, all of them
    pub tags: Vec<String>,

    /// Tags that reject a block, any of them
    pub exclude_tags: Vec<String>,

    /// Do not look for code blocks inside HTML comments
    pub exclude_comments: bool,

    /// Nested comment levels to unwrap before giving up on a branch; unlimited when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_comment_depth: Option<usize>,
}

/// The `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Permission bits for created files
    pub file_mode: FileMode,

    /// What to do with files that already exist
    pub write_mode: WritePolicy,
}

impl Config {
    /// Parse configuration from TOML text. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            message: e.message().to_string(),
        })
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path_str.clone(),
        })?;
        log::debug!("[mdextract-config] Loading {path_str}");
        Self::from_toml(&content, &path_str)
    }

    /// The extraction settings described by the `[filter]` section.
    pub fn extract_options(&self) -> ExtractOptions {
        let listed = |tags: &[String]| tags.iter().filter(|tag| !tag.is_empty()).cloned().collect::<Vec<_>>();

        ExtractOptions {
            filter: TagFilter::new(listed(&self.filter.tags), listed(&self.filter.exclude_tags)),
            include_comments: !self.filter.exclude_comments,
            max_comment_depth: self.filter.max_comment_depth,
        }
    }
}

/// Discover a configuration file by walking up from `start_dir`.
///
/// Stops at the first directory that holds a config file, at a directory
/// containing `.git`, or after [`MAX_DISCOVERY_DEPTH`] levels.
pub fn discover_config_upward(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    for _ in 0..MAX_DISCOVERY_DEPTH {
        log::debug!("[mdextract-config] Searching for config in: {}", current_dir.display());

        for config_name in CONFIG_FILES {
            let config_path = current_dir.join(config_name);
            if config_path.is_file() {
                log::debug!("[mdextract-config] Found config file: {}", config_path.display());
                return Some(config_path);
            }
        }

        if current_dir.join(".git").exists() {
            log::debug!("[mdextract-config] Stopping at .git directory");
            return None;
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }

    log::debug!("[mdextract-config] Maximum traversal depth reached");
    None
}

/// Resolve the effective configuration.
///
/// An explicit path must load successfully. Otherwise discovery starts at
/// `start_dir` unless `no_config` is set. Returns the config together with
/// the file it came from, if any.
pub fn load_config(
    explicit: Option<&Path>,
    no_config: bool,
    start_dir: &Path,
) -> Result<(Config, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((Config::load(path)?, Some(path.to_path_buf())));
    }

    if no_config {
        log::debug!("[mdextract-config] Config discovery disabled");
        return Ok((Config::default(), None));
    }

    match discover_config_upward(start_dir) {
        Some(path) => Ok((Config::load(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("", "test.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output.file_mode, FileMode::DEFAULT);
        assert_eq!(config.output.write_mode, WritePolicy::Append);
        assert_eq!(config.extract_options(), ExtractOptions::default());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
[filter]
tags = ["ci"]
exclude-tags = ["noci", "slow"]
exclude-comments = true
max-comment-depth = 8

[output]
file-mode = "0644"
write-mode = "truncate"
"#;
        let config = Config::from_toml(content, "test.toml").unwrap();
        assert_eq!(config.filter.tags, vec!["ci"]);
        assert_eq!(config.filter.exclude_tags, vec!["noci", "slow"]);
        assert!(config.filter.exclude_comments);
        assert_eq!(config.output.file_mode.bits(), 0o644);
        assert_eq!(config.output.write_mode, WritePolicy::Truncate);

        let options = config.extract_options();
        assert!(!options.include_comments);
        assert_eq!(options.max_comment_depth, Some(8));
        assert!(options.filter.accept(&["go", "ci"]));
        assert!(!options.filter.accept(&["go", "ci", "slow"]));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("[filter]\nlanguage = \"go\"\n", "bad.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "bad.toml"));
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn test_invalid_file_mode_is_rejected() {
        assert!(Config::from_toml("[output]\nfile-mode = \"rwx\"\n", "bad.toml").is_err());
    }

    #[test]
    fn test_discover_walks_upward_and_stops_at_git() {
        let root = tempdir().unwrap();
        let project = root.path().join("project");
        let nested = project.join("docs").join("guide");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir(project.join(".git")).unwrap();

        assert_eq!(discover_config_upward(&nested), None);

        // A config above the .git boundary is never picked up
        fs::write(root.path().join(".mdextract.toml"), "").unwrap();
        assert_eq!(discover_config_upward(&nested), None);

        fs::write(project.join("mdextract.toml"), "").unwrap();
        assert_eq!(discover_config_upward(&nested), Some(project.join("mdextract.toml")));

        fs::write(project.join(".mdextract.toml"), "").unwrap();
        assert_eq!(discover_config_upward(&nested), Some(project.join(".mdextract.toml")));
    }

    #[test]
    fn test_load_config_precedence() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".mdextract.toml"), "[filter]\ntags = [\"discovered\"]\n").unwrap();
        let explicit = dir.path().join("explicit.toml");
        fs::write(&explicit, "[filter]\ntags = [\"explicit\"]\n").unwrap();

        let (config, source) = load_config(Some(&explicit), false, dir.path()).unwrap();
        assert_eq!(config.filter.tags, vec!["explicit"]);
        assert_eq!(source, Some(explicit));

        let (config, source) = load_config(None, false, dir.path()).unwrap();
        assert_eq!(config.filter.tags, vec!["discovered"]);
        assert_eq!(source, Some(dir.path().join(".mdextract.toml")));

        let (config, source) = load_config(None, true, dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(source, None);
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&missing), false, dir.path()),
            Err(ConfigError::Io { .. })
        ));
    }
}
