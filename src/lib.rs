// member-gate/src/lib.rs
// ============================================================================
// Module: Member Gate Library Root
// Description: Guarded read-only namespace views with per-member policies.
// Purpose: Expose the policy model, collaborator traits, and gate runtime.
// Dependencies: serde, serde_json, thiserror, toml
// ============================================================================

//! Guarded read-only views over namespaces.
//!
//! ## Overview
//! Member Gate wraps any read-only namespace in an access policy. A policy
//! table is compiled once from construction options: explicit per-name level
//! overrides, a whitelist, and implicit whitelisting of exported names.
//! Every member read is then classified before the value is fetched:
//! `ignore` passes silently, `warn` and `debug` emit an advisory diagnostic
//! to an injected sink, and `error` denies the read without consulting the
//! namespace. Name enumeration passes straight through and is never filtered
//! by policy.
//!
//! ## Design Principles
//! - Determinism: classification depends only on the compiled table.
//! - Read-only: the gate never mutates the namespace it guards.
//! - Fire-and-forget diagnostics: sinks cannot fail the read path.
//! - Fail-fast configuration: invalid level values reject construction.

pub mod config;
pub mod core;
pub mod interfaces;
pub mod runtime;

pub use self::config::ConfigError;
pub use self::config::GateConfig;
pub use self::core::AccessLevel;
pub use self::core::GateOptions;
pub use self::core::LevelParseError;
pub use self::core::LevelSource;
pub use self::core::MemberName;
pub use self::core::PolicySummary;
pub use self::core::PolicyTable;
pub use self::core::Resolution;
pub use self::interfaces::Diagnostic;
pub use self::interfaces::DiagnosticsSink;
pub use self::interfaces::JsonNamespace;
pub use self::interfaces::Namespace;
pub use self::interfaces::NamespaceError;
pub use self::interfaces::Severity;
pub use self::runtime::AccessError;
pub use self::runtime::CallbackSink;
pub use self::runtime::InMemoryNamespace;
pub use self::runtime::MemberGate;
pub use self::runtime::NullSink;
pub use self::runtime::RecordingSink;
pub use self::runtime::WriterSink;
