use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an output file that already exists is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Keep existing contents and append, so repeated runs accumulate.
    #[default]
    Append,
    /// Replace existing contents.
    Truncate,
    /// Refuse to touch a file that already exists.
    CreateNew,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown write mode '{0}' (expected append, truncate or create-new)")]
pub struct WritePolicyError(String);

impl FromStr for WritePolicy {
    type Err = WritePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "append" => Ok(Self::Append),
            "truncate" => Ok(Self::Truncate),
            "create-new" => Ok(Self::CreateNew),
            _ => Err(WritePolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Append => "append",
            Self::Truncate => "truncate",
            Self::CreateNew => "create-new",
        })
    }
}
