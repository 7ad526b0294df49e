// member-gate/src/interfaces/json.rs
// ============================================================================
// Module: JSON Namespace
// Description: Namespace adapter over a JSON object.
// Purpose: Guard ad-hoc JSON documents without a bespoke namespace type.
// Dependencies: serde_json
// ============================================================================

//! JSON object adapter for the [`Namespace`] trait.
//!
//! Keys starting with an underscore are treated as private; every other key
//! is part of the exported surface.

use std::collections::BTreeSet;

use serde_json::Map;
use serde_json::Value;

use crate::core::identifiers::MemberName;
use crate::interfaces::Namespace;
use crate::interfaces::NamespaceError;

/// Namespace backed by a JSON object's top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNamespace {
    /// Top-level object fields.
    object: Map<String, Value>,
}

impl JsonNamespace {
    /// Creates a namespace from a JSON value.
    ///
    /// # Errors
    /// Returns [`NamespaceError::Other`] when the value is not an object.
    pub fn new(value: Value) -> Result<Self, NamespaceError> {
        match value {
            Value::Object(object) => Ok(Self { object }),
            other => Err(NamespaceError::Other(format!(
                "json namespace requires a top-level object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Creates a namespace directly from an object map.
    #[must_use]
    pub const fn from_object(object: Map<String, Value>) -> Self {
        Self { object }
    }

    /// Reports whether a key is part of the exported surface.
    fn is_exported(name: &str) -> bool {
        !name.starts_with('_')
    }
}

impl Namespace for JsonNamespace {
    type Value = Value;

    fn member(&self, name: &MemberName) -> Result<Self::Value, NamespaceError> {
        self.object
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| NamespaceError::UnknownMember(name.clone()))
    }

    fn exported_names(&self) -> BTreeSet<MemberName> {
        self.object
            .keys()
            .filter(|name| Self::is_exported(name.as_str()))
            .map(|name| MemberName::new(name.clone()))
            .collect()
    }

    fn member_names(&self, include_private: bool) -> Vec<MemberName> {
        self.object
            .keys()
            .filter(|name| include_private || Self::is_exported(name.as_str()))
            .map(|name| MemberName::new(name.clone()))
            .collect()
    }
}

/// Returns a short label for a JSON value's kind.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
