use clap::Args;
use mdextract_lib::types::{FileMode, WritePolicy};
use std::path::PathBuf;

/// Options shared by the `single` and `multi` commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Markdown files to extract from, processed in the order given
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only extract code blocks carrying all of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Skip code blocks carrying any of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude_tags: Option<Vec<String>>,

    /// Do not extract code blocks inside HTML comments
    #[arg(long)]
    pub exclude_comments: bool,

    /// Stop unwrapping HTML comments nested deeper than N levels (unlimited by default)
    #[arg(long, value_name = "N")]
    pub max_comment_depth: Option<usize>,

    /// Permission bits for created files, in octal (e.g. 0600)
    #[arg(long, value_name = "OCTAL")]
    pub file_mode: Option<FileMode>,

    /// What to do with output files that already exist: append, truncate or create-new
    #[arg(long, value_name = "MODE")]
    pub write_mode: Option<WritePolicy>,

    /// Exit with code 1 if no code block was extracted
    #[arg(long)]
    pub fail_on_empty: bool,
}

#[derive(Args, Debug)]
pub struct SingleArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: String,
}

#[derive(Args, Debug)]
pub struct MultiArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}
