// member-gate/src/core/summary.rs
// ============================================================================
// Module: Policy Summary
// Description: Classification counts for a compiled policy table.
// Purpose: Give audit surfaces a compact view without exposing entries.
// Dependencies: serde
// ============================================================================

//! Compact classification counts for audit surfaces.

use serde::Deserialize;
use serde::Serialize;

use crate::core::level::AccessLevel;

/// Classification counts for a compiled policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySummary {
    /// Level applied to unclassified names.
    pub default_level: AccessLevel,
    /// Number of names classified at `ignore`.
    pub ignore_count: usize,
    /// Number of names classified at `warn`.
    pub warn_count: usize,
    /// Number of names classified at `debug`.
    pub debug_count: usize,
    /// Number of names classified at `error`.
    pub error_count: usize,
}

impl PolicySummary {
    /// Creates an empty summary with the given default level.
    #[must_use]
    pub const fn new(default_level: AccessLevel) -> Self {
        Self {
            default_level,
            ignore_count: 0,
            warn_count: 0,
            debug_count: 0,
            error_count: 0,
        }
    }

    /// Records one classified name at the given level.
    pub fn record(&mut self, level: AccessLevel) {
        match level {
            AccessLevel::Ignore => self.ignore_count += 1,
            AccessLevel::Warn => self.warn_count += 1,
            AccessLevel::Debug => self.debug_count += 1,
            AccessLevel::Error => self.error_count += 1,
        }
    }

    /// Returns the total number of classified names.
    #[must_use]
    pub const fn classified_total(&self) -> usize {
        self.ignore_count + self.warn_count + self.debug_count + self.error_count
    }
}
