//! Command handlers for the mdextract CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod completions;
pub mod init;
pub mod multi;
pub mod single;

use anyhow::Context;
use mdextract_lib::config::{self, Config};
use mdextract_lib::extract::ExtractOptions;
use mdextract_lib::filter::TagFilter;
use mdextract_lib::types::{FileMode, WritePolicy};
use std::path::PathBuf;

use crate::cli_types::FilterArgs;

/// Flags that apply to every command
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub no_config: bool,
}

/// How a command finished, mapped to an exit code by `main()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    NothingExtracted,
}

impl Outcome {
    pub fn from_extracted(extracted: bool, fail_on_empty: bool) -> Self {
        if !extracted && fail_on_empty {
            Self::NothingExtracted
        } else {
            Self::Done
        }
    }
}

/// Effective settings after merging the config file with command-line flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub options: ExtractOptions,
    pub file_mode: FileMode,
    pub write_mode: WritePolicy,
}

fn non_empty(tags: &[String]) -> impl Iterator<Item = String> + '_ {
    tags.iter().filter(|tag| !tag.is_empty()).cloned()
}

/// Merge flags over the configuration file. Flags win; list flags replace.
pub fn resolve_settings(global: &GlobalOptions, args: &FilterArgs) -> anyhow::Result<Settings> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let (config, source) = config::load_config(global.config.as_deref(), global.no_config, &cwd)?;
    if let Some(path) = &source {
        log::debug!("Using configuration from {}", path.display());
    }

    Ok(merge_settings(&config, args))
}

fn merge_settings(config: &Config, args: &FilterArgs) -> Settings {
    let mut options = config.extract_options();

    if args.tags.is_some() || args.exclude_tags.is_some() {
        let required = args.tags.as_deref().unwrap_or(options.filter.required());
        let excluded = args.exclude_tags.as_deref().unwrap_or(options.filter.excluded());
        options.filter = TagFilter::new(non_empty(required), non_empty(excluded));
    }
    if args.exclude_comments {
        options.include_comments = false;
    }
    if args.max_comment_depth.is_some() {
        options.max_comment_depth = args.max_comment_depth;
    }

    Settings {
        options,
        file_mode: args.file_mode.unwrap_or(config.output.file_mode),
        write_mode: args.write_mode.unwrap_or(config.output.write_mode),
    }
}
