// member-gate/tests/common/mod.rs
// ============================================================================
// Module: Shared Test Fixtures
// Description: Namespaces and helpers shared across integration tests.
// Purpose: Keep test setup consistent without repeating fixture code.
// ============================================================================

//! Shared fixtures for integration tests.

#![allow(dead_code, reason = "Not every test binary uses every fixture.")]

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use member_gate::InMemoryNamespace;
use member_gate::MemberName;
use member_gate::Namespace;
use member_gate::NamespaceError;

/// Creates a member name from a literal.
pub fn name(value: &str) -> MemberName {
    MemberName::new(value)
}

/// Builds a namespace with one exported member `foo` and one private `bar`.
pub fn sample_namespace() -> InMemoryNamespace<i64> {
    let mut namespace = InMemoryNamespace::new();
    namespace.insert_exported("foo", 1);
    namespace.insert_private("bar", 2);
    namespace
}

/// Namespace wrapper that records every member fetch.
#[derive(Debug, Clone)]
pub struct ProbeNamespace {
    /// Underlying namespace supplying values.
    inner: InMemoryNamespace<i64>,
    /// Names fetched through `member`, in call order.
    fetched: Arc<Mutex<Vec<MemberName>>>,
}

impl ProbeNamespace {
    /// Wraps the given namespace.
    pub fn new(inner: InMemoryNamespace<i64>) -> Self {
        Self {
            inner,
            fetched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the names fetched through `member` so far.
    pub fn fetched(&self) -> Vec<MemberName> {
        self.fetched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Namespace for ProbeNamespace {
    type Value = i64;

    fn member(&self, name: &MemberName) -> Result<Self::Value, NamespaceError> {
        self.fetched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.clone());
        self.inner.member(name)
    }

    fn exported_names(&self) -> BTreeSet<MemberName> {
        self.inner.exported_names()
    }

    fn member_names(&self, include_private: bool) -> Vec<MemberName> {
        self.inner.member_names(include_private)
    }
}
