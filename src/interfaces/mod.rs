// member-gate/src/interfaces/mod.rs
// ============================================================================
// Module: Collaborator Interfaces
// Description: Trait seams between the gate and its collaborators.
// Purpose: Keep the gate deterministic and testable behind narrow traits.
// Dependencies: serde, thiserror
// ============================================================================

//! Collaborator interfaces for guarded namespaces.
//!
//! ## Overview
//! The gate never owns the data it guards or the diagnostics it raises. A
//! [`Namespace`] supplies members and name enumeration; a [`DiagnosticsSink`]
//! receives advisory diagnostics. Both traits are object-safe and implemented
//! for references and [`Arc`] so callers choose their own sharing model.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::MemberName;

pub mod json;

pub use json::JsonNamespace;

/// Errors raised by a namespace while fetching members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// The requested member does not exist.
    #[error("unknown member: {0}")]
    UnknownMember(MemberName),
    /// Any other namespace-specific failure.
    #[error("namespace error: {0}")]
    Other(String),
}

/// Read-only source of members guarded by a gate.
///
/// Implementations expose three things: member lookup by name, the set of
/// exported names used for implicit whitelisting, and deterministic name
/// enumeration for pass-through listing.
pub trait Namespace {
    /// Value type produced by member reads.
    type Value;

    /// Fetches the named member's value.
    ///
    /// # Errors
    /// Returns [`NamespaceError::UnknownMember`] when the member does not
    /// exist, or [`NamespaceError::Other`] for namespace-specific failures.
    fn member(&self, name: &MemberName) -> Result<Self::Value, NamespaceError>;

    /// Returns the names considered part of the exported surface.
    fn exported_names(&self) -> BTreeSet<MemberName>;

    /// Enumerates member names in the namespace's deterministic order.
    ///
    /// When `include_private` is false, only exported names are listed.
    fn member_names(&self, include_private: bool) -> Vec<MemberName>;
}

impl<N> Namespace for &N
where
    N: Namespace + ?Sized,
{
    type Value = N::Value;

    fn member(&self, name: &MemberName) -> Result<Self::Value, NamespaceError> {
        (**self).member(name)
    }

    fn exported_names(&self) -> BTreeSet<MemberName> {
        (**self).exported_names()
    }

    fn member_names(&self, include_private: bool) -> Vec<MemberName> {
        (**self).member_names(include_private)
    }
}

impl<N> Namespace for Arc<N>
where
    N: Namespace + ?Sized,
{
    type Value = N::Value;

    fn member(&self, name: &MemberName) -> Result<Self::Value, NamespaceError> {
        (**self).member(name)
    }

    fn exported_names(&self) -> BTreeSet<MemberName> {
        (**self).exported_names()
    }

    fn member_names(&self, include_private: bool) -> Vec<MemberName> {
        (**self).member_names(include_private)
    }
}

/// Severity attached to an advisory diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Warning-severity advisory.
    Warn,
    /// Debug-severity advisory.
    Debug,
}

impl Severity {
    /// Returns the canonical lowercase spelling of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

/// Advisory record emitted for an off-surface member read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the advisory.
    pub severity: Severity,
    /// Human-readable advisory message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic from its parts.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Consumer of advisory diagnostics emitted during guarded reads.
///
/// Emission is fire-and-forget: sinks must not fail the read path, so the
/// trait exposes no error channel.
pub trait DiagnosticsSink {
    /// Delivers one advisory diagnostic.
    fn emit(&self, severity: Severity, message: &str);
}

impl<S> DiagnosticsSink for &S
where
    S: DiagnosticsSink + ?Sized,
{
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

impl<S> DiagnosticsSink for Arc<S>
where
    S: DiagnosticsSink + ?Sized,
{
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}
