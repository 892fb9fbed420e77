use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unix permission bits applied to files created by extraction.
///
/// Parsed from octal text (`"0600"`, `"644"`, `"0o755"`) or, in TOML, from an
/// integer literal such as `0o600`. Bits above `0o7777` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    pub const MAX: u32 = 0o7777;

    /// Owner read/write only.
    pub const DEFAULT: FileMode = FileMode(0o600);

    pub fn new(bits: u32) -> Result<Self, FileModeError> {
        if bits <= Self::MAX {
            Ok(Self(bits))
        } else {
            Err(FileModeError::OutOfRange(bits))
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileModeError {
    #[error("'{0}' is not an octal file mode (expected something like 0600)")]
    NotOctal(String),
    #[error("file mode {0:o} exceeds 7777")]
    OutOfRange(u32),
}

impl FromStr for FileMode {
    type Err = FileModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);
        let bits = u32::from_str_radix(digits, 8).map_err(|_| FileModeError::NotOctal(s.to_string()))?;
        Self::new(bits)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl<'de> Deserialize<'de> for FileMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bits(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bits(bits) => FileMode::new(bits).map_err(serde::de::Error::custom),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for FileMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
