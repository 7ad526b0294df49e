// member-gate/src/runtime/gate.rs
// ============================================================================
// Module: Member Gate
// Description: Guarded read-only view over a namespace.
// Purpose: Classify every member read and act before the value is fetched.
// Dependencies: thiserror
// ============================================================================

//! Guarded read path over a namespace.
//!
//! ## Overview
//! [`MemberGate`] wraps a [`Namespace`] with a compiled [`PolicyTable`] and a
//! [`DiagnosticsSink`]. Every read resolves the member's level first:
//! `ignore` passes silently, `warn` and `debug` emit one advisory per read,
//! and `error` denies the read without touching the namespace. Name
//! enumeration is a pure pass-through and is never filtered by policy.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::config::ConfigError;
use crate::config::GateConfig;
use crate::core::identifiers::MemberName;
use crate::core::level::AccessLevel;
use crate::core::options::GateOptions;
use crate::core::policy::PolicyTable;
use crate::core::policy::Resolution;
use crate::interfaces::DiagnosticsSink;
use crate::interfaces::Namespace;
use crate::interfaces::NamespaceError;
use crate::interfaces::Severity;

/// Errors returned by guarded member reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Read denied because the member resolves to the `error` level.
    #[error("unauthorized member access: {member}")]
    Unauthorized {
        /// Name of the denied member.
        member: MemberName,
    },
    /// Failure raised by the underlying namespace, passed through unchanged.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

impl AccessError {
    /// Returns the denied member name for authorization failures.
    #[must_use]
    pub const fn unauthorized_member(&self) -> Option<&MemberName> {
        match self {
            Self::Unauthorized { member } => Some(member),
            Self::Namespace(_) => None,
        }
    }
}

/// Guarded read-only view over a namespace.
#[derive(Debug, Clone)]
pub struct MemberGate<N, S> {
    /// Namespace supplying member values and name enumeration.
    namespace: N,
    /// Sink receiving advisory diagnostics.
    sink: S,
    /// Compiled policy consulted on every read.
    policy: PolicyTable,
}

impl<N, S> MemberGate<N, S>
where
    N: Namespace,
    S: DiagnosticsSink,
{
    /// Builds a gate from typed options.
    ///
    /// Exported names are sampled from the namespace once, here, and only
    /// when [`GateOptions::allow_exported`] is set. Members added to the
    /// namespace afterwards are not implicitly whitelisted.
    #[must_use]
    pub fn new(namespace: N, options: &GateOptions, sink: S) -> Self {
        let exported = if options.allow_exported {
            namespace.exported_names()
        } else {
            BTreeSet::new()
        };
        let policy = PolicyTable::build(options, exported);
        Self {
            namespace,
            sink,
            policy,
        }
    }

    /// Builds a gate from raw configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration carries a level value
    /// outside the four recognized levels.
    pub fn from_config(namespace: N, config: &GateConfig, sink: S) -> Result<Self, ConfigError> {
        let options = config.resolve()?;
        Ok(Self::new(namespace, &options, sink))
    }

    /// Reads a member through the policy.
    ///
    /// Classification happens before the namespace is consulted: a member at
    /// the `error` level is denied without fetching, and advisory levels
    /// emit their diagnostic on every read, with no deduplication.
    ///
    /// # Errors
    /// Returns [`AccessError::Unauthorized`] when the member resolves to the
    /// `error` level, or the namespace's own failure passed through
    /// unchanged.
    pub fn read(&self, name: &MemberName) -> Result<N::Value, AccessError> {
        match self.policy.resolve(name).level {
            AccessLevel::Ignore => {}
            AccessLevel::Warn => self.emit_advisory(Severity::Warn, name),
            AccessLevel::Debug => self.emit_advisory(Severity::Debug, name),
            AccessLevel::Error => {
                return Err(AccessError::Unauthorized {
                    member: name.clone(),
                });
            }
        }
        Ok(self.namespace.member(name)?)
    }

    /// Enumerates member names, passing the namespace's order through.
    ///
    /// Enumeration is never filtered by policy; only the namespace's own
    /// `include_private` semantics apply.
    #[must_use]
    pub fn member_names(&self, include_private: bool) -> Vec<MemberName> {
        self.namespace.member_names(include_private)
    }

    /// Resolves a member's level and provenance without side effects.
    #[must_use]
    pub fn resolve(&self, name: &MemberName) -> Resolution {
        self.policy.resolve(name)
    }

    /// Returns the compiled policy table.
    #[must_use]
    pub const fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Returns the guarded namespace.
    #[must_use]
    pub const fn namespace(&self) -> &N {
        &self.namespace
    }

    /// Emits the advisory diagnostic for an off-surface read.
    fn emit_advisory(&self, severity: Severity, name: &MemberName) {
        self.sink
            .emit(severity, &format!("{name} is not part of the API"));
    }
}
