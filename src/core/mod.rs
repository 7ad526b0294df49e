// member-gate/src/core/mod.rs
// ============================================================================
// Module: Core Types
// Description: Policy model shared by every gate surface.
// Purpose: Organize levels, identifiers, options, and the compiled table.
// Dependencies: serde, thiserror
// ============================================================================

//! Core policy model for guarded namespaces.

pub mod identifiers;
pub mod level;
pub mod options;
pub mod policy;
pub mod summary;

pub use identifiers::MemberName;
pub use level::AccessLevel;
pub use level::LevelParseError;
pub use options::GateOptions;
pub use policy::LevelSource;
pub use policy::PolicyTable;
pub use policy::Resolution;
pub use summary::PolicySummary;
