// member-gate/src/core/options.rs
// ============================================================================
// Module: Gate Options
// Description: Typed construction options for a member gate.
// Purpose: Capture policy inputs once, before they are compiled into a table.
// Dependencies: serde
// ============================================================================

//! Typed construction options for a member gate.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::MemberName;
use crate::core::level::AccessLevel;

/// Default for [`GateOptions::allow_exported`].
const fn default_allow_exported() -> bool {
    true
}

/// Options controlling how a gate classifies member reads.
///
/// Precedence during classification: `levels` overrides, then the combined
/// whitelist (`whitelist` plus exported names when `allow_exported` is set),
/// then `default_level` for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOptions {
    /// Level applied to names without any other classification.
    #[serde(default)]
    pub default_level: AccessLevel,
    /// Names always readable without diagnostics unless overridden.
    #[serde(default)]
    pub whitelist: BTreeSet<MemberName>,
    /// Whether the namespace's exported names are implicitly whitelisted.
    #[serde(default = "default_allow_exported")]
    pub allow_exported: bool,
    /// Per-name level overrides taking precedence over all other sources.
    #[serde(default)]
    pub levels: BTreeMap<MemberName, AccessLevel>,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            default_level: AccessLevel::default(),
            whitelist: BTreeSet::new(),
            allow_exported: default_allow_exported(),
            levels: BTreeMap::new(),
        }
    }
}
