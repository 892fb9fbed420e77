//! Exit codes for mdextract
//!
//! These exit codes allow scripts and CI jobs to distinguish between
//! an empty extraction and an actual failure.

/// Success - Extraction finished
pub const SUCCESS: i32 = 0;

/// Nothing extracted - Only returned when `--fail-on-empty` is given
pub const NOTHING_EXTRACTED: i32 = 1;

/// Tool error - Configuration error, file access error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{NOTHING_EXTRACTED, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with nothing extracted code (1)
    pub fn nothing_extracted() -> ! {
        std::process::exit(NOTHING_EXTRACTED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
