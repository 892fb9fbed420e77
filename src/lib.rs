pub mod config;
pub mod exit_codes;
pub mod extract;
pub mod filter;
pub mod init;
pub mod output;
pub mod parallel;
pub mod tags;
pub mod types;
pub mod walker;

pub use crate::config::Config;
pub use crate::extract::{ExtractError, ExtractOptions, FileMap, MultiExtractor, SingleExtractor};
pub use crate::filter::TagFilter;
pub use crate::walker::{Block, BlockVisitor, CommentWalker};
