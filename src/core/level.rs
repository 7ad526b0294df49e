// member-gate/src/core/level.rs
// ============================================================================
// Module: Access Levels
// Description: Action levels applied to guarded member reads.
// Purpose: Define the closed set of levels and their canonical spellings.
// Dependencies: serde, thiserror
// ============================================================================

//! Access levels for guarded member reads.
//!
//! ## Overview
//! Every member read resolves to exactly one [`AccessLevel`]. The level
//! decides what happens when the member is not part of the sanctioned
//! surface: nothing, an advisory diagnostic, or an authorization failure.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Action taken when a guarded member is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Allow the read without any side effect.
    Ignore,
    /// Allow the read and emit a warning-severity diagnostic.
    Warn,
    /// Allow the read and emit a debug-severity diagnostic.
    Debug,
    /// Deny the read with an authorization failure.
    #[default]
    Error,
}

impl AccessLevel {
    /// Returns the canonical lowercase spelling of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Error => "error",
        }
    }

    /// Returns every level in canonical declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ignore, Self::Warn, Self::Debug, Self::Error]
    }

    /// Parses a level from its canonical lowercase spelling.
    ///
    /// # Errors
    /// Returns [`LevelParseError`] when the value is not one of `ignore`,
    /// `warn`, `debug`, or `error`.
    pub fn parse(value: &str) -> Result<Self, LevelParseError> {
        match value {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "debug" => Ok(Self::Debug),
            "error" => Ok(Self::Error),
            other => Err(LevelParseError {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl std::str::FromStr for AccessLevel {
    type Err = LevelParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Error produced when a textual level value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown access level: {value} (expected one of: ignore, warn, debug, error)")]
pub struct LevelParseError {
    /// The rejected textual value.
    pub value: String,
}
