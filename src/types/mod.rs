//! Type-safe configuration types for mdextract.
//!
//! Newtype wrappers that validate output settings at deserialization time,
//! so a bad `file-mode` in a config file fails before any file is touched.

mod file_mode;
mod write_policy;

pub use file_mode::{FileMode, FileModeError};
pub use write_policy::{WritePolicy, WritePolicyError};
