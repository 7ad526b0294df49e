// member-gate/src/core/identifiers.rs
// ============================================================================
// Module: Core Identifier Types
// Description: Newtype wrapper for member names.
// Purpose: Provide a type-safe member identifier with serde support.
// Dependencies: serde
// ============================================================================

//! Identifier newtypes used across the gate.

use serde::Deserialize;
use serde::Serialize;

/// Name of a member inside a guarded namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    /// Creates a new member name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberName {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for MemberName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemberName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
