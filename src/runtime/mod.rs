// member-gate/src/runtime/mod.rs
// ============================================================================
// Module: Runtime
// Description: Gate runtime plus reference collaborator implementations.
// Purpose: Organize the read path and the batteries-included collaborators.
// Dependencies: serde_json, thiserror
// ============================================================================

//! Gate runtime and reference collaborator implementations.

pub mod gate;
pub mod namespace;
pub mod sinks;

pub use gate::AccessError;
pub use gate::MemberGate;
pub use namespace::InMemoryNamespace;
pub use sinks::CallbackSink;
pub use sinks::NullSink;
pub use sinks::RecordingSink;
pub use sinks::WriterSink;
