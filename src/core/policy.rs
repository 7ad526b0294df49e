// member-gate/src/core/policy.rs
// ============================================================================
// Module: Policy Table
// Description: Compiled per-member classification with provenance.
// Purpose: Resolve member names to access levels deterministically.
// Dependencies: serde
// ============================================================================

//! Compiled access policy for a guarded namespace.
//!
//! ## Overview
//! A [`PolicyTable`] is built once from [`GateOptions`] plus the namespace's
//! exported names, then consulted on every read. Classification precedence:
//! explicit `levels` overrides win, then whitelist membership (configured or
//! exported), then the default level. Unclassified names are never
//! materialized as entries; they fall back to the default at resolution time.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::MemberName;
use crate::core::level::AccessLevel;
use crate::core::options::GateOptions;
use crate::core::summary::PolicySummary;

/// Origin of a resolved access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSource {
    /// The name carries an explicit per-name level override.
    Explicit,
    /// The name is in the configured whitelist.
    Whitelist,
    /// The name was exported by the namespace and implicitly whitelisted.
    Exported,
    /// No classification applied; the default level was used.
    Default,
}

impl LevelSource {
    /// Returns the canonical lowercase spelling of the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Whitelist => "whitelist",
            Self::Exported => "exported",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for LevelSource {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

/// Resolved level plus the source that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Level applied to the read.
    pub level: AccessLevel,
    /// Classification source that decided the level.
    pub source: LevelSource,
}

impl Resolution {
    /// Creates a resolution from its parts.
    #[must_use]
    pub const fn new(level: AccessLevel, source: LevelSource) -> Self {
        Self { level, source }
    }
}

/// Immutable per-member classification consulted on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    /// Level applied to names without a table entry.
    default_level: AccessLevel,
    /// Classified names with provenance.
    entries: BTreeMap<MemberName, Resolution>,
}

impl PolicyTable {
    /// Builds the table from options and the namespace's exported names.
    ///
    /// `exported` must already honor [`GateOptions::allow_exported`]: callers
    /// pass an empty set when exported names are not implicitly whitelisted.
    /// Later insertions overwrite earlier ones, so explicit level overrides
    /// beat whitelist membership, which beats exported membership.
    #[must_use]
    pub fn build(options: &GateOptions, exported: BTreeSet<MemberName>) -> Self {
        let mut entries = BTreeMap::new();
        for name in exported {
            entries.insert(name, Resolution::new(AccessLevel::Ignore, LevelSource::Exported));
        }
        for name in &options.whitelist {
            entries.insert(
                name.clone(),
                Resolution::new(AccessLevel::Ignore, LevelSource::Whitelist),
            );
        }
        for (name, level) in &options.levels {
            entries.insert(name.clone(), Resolution::new(*level, LevelSource::Explicit));
        }
        Self {
            default_level: options.default_level,
            entries,
        }
    }

    /// Resolves a member name to its level and provenance.
    ///
    /// Unclassified names resolve to the default level without being added
    /// to the table.
    #[must_use]
    pub fn resolve(&self, name: &MemberName) -> Resolution {
        self.entries
            .get(name)
            .copied()
            .unwrap_or_else(|| Resolution::new(self.default_level, LevelSource::Default))
    }

    /// Returns the level applied to unclassified names.
    #[must_use]
    pub const fn default_level(&self) -> AccessLevel {
        self.default_level
    }

    /// Reports whether the name has its own table entry.
    #[must_use]
    pub fn is_classified(&self, name: &MemberName) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the classified entries in deterministic name order.
    #[must_use]
    pub const fn classified(&self) -> &BTreeMap<MemberName, Resolution> {
        &self.entries
    }

    /// Returns the number of classified names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no names are classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Produces classification counts for audit surfaces.
    #[must_use]
    pub fn summary(&self) -> PolicySummary {
        let mut summary = PolicySummary::new(self.default_level);
        for resolution in self.entries.values() {
            summary.record(resolution.level);
        }
        summary
    }
}
