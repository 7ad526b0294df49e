// member-gate/src/runtime/namespace.rs
// ============================================================================
// Module: In-Memory Namespace
// Description: Map-backed reference namespace implementation.
// Purpose: Provide a deterministic namespace for embedding and tests.
// Dependencies: None (std collections only)
// ============================================================================

//! In-memory reference implementation of the [`Namespace`] trait.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::core::identifiers::MemberName;
use crate::interfaces::Namespace;
use crate::interfaces::NamespaceError;

/// Stored member value plus export visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MemberEntry<V> {
    /// Value returned on reads.
    value: V,
    /// Whether the member is part of the exported surface.
    exported: bool,
}

/// Map-backed namespace with explicit export visibility per member.
///
/// Enumeration order is the name order of the backing map, so listings are
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryNamespace<V> {
    /// Members keyed by name.
    members: BTreeMap<MemberName, MemberEntry<V>>,
}

impl<V> InMemoryNamespace<V> {
    /// Creates an empty namespace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }

    /// Inserts a member on the exported surface, replacing any existing one.
    pub fn insert_exported(&mut self, name: impl Into<MemberName>, value: V) {
        self.insert_member(name.into(), value, true);
    }

    /// Inserts a private member, replacing any existing one.
    pub fn insert_private(&mut self, name: impl Into<MemberName>, value: V) {
        self.insert_member(name.into(), value, false);
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Reports whether the namespace has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Stores a member entry under its name.
    fn insert_member(&mut self, name: MemberName, value: V, exported: bool) {
        self.members.insert(name, MemberEntry { value, exported });
    }
}

impl<V> Default for InMemoryNamespace<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Namespace for InMemoryNamespace<V>
where
    V: Clone,
{
    type Value = V;

    fn member(&self, name: &MemberName) -> Result<Self::Value, NamespaceError> {
        self.members
            .get(name)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| NamespaceError::UnknownMember(name.clone()))
    }

    fn exported_names(&self) -> BTreeSet<MemberName> {
        self.members
            .iter()
            .filter(|(_, entry)| entry.exported)
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn member_names(&self, include_private: bool) -> Vec<MemberName> {
        self.members
            .iter()
            .filter(|(_, entry)| include_private || entry.exported)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
