// member-gate/src/config.rs
// ============================================================================
// Module: Gate Configuration
// Description: Raw configuration model with fail-fast resolution.
// Purpose: Validate untyped level values before a gate is constructed.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! Raw configuration for gates built from untyped sources.
//!
//! ## Overview
//! [`GateConfig`] mirrors [`GateOptions`] with string-valued levels so it can
//! be deserialized from TOML or JSON. Resolution is fail-fast: any level
//! value outside the recognized set rejects the whole configuration with the
//! offending entry named, before a gate is constructed.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::MemberName;
use crate::core::level::AccessLevel;
use crate::core::options::GateOptions;

/// Default raw value for [`GateConfig::default_level`].
fn default_level_raw() -> String {
    AccessLevel::Error.as_str().to_string()
}

/// Default for [`GateConfig::allow_exported`].
const fn default_allow_exported() -> bool {
    true
}

/// Errors raised while parsing or resolving raw configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The raw input could not be deserialized.
    #[error("config parse error: {0}")]
    Parse(String),
    /// A level value outside the recognized set was supplied.
    #[error("invalid access level for {context}: {value} (expected one of: ignore, warn, debug, error)")]
    InvalidLevel {
        /// Location of the offending value within the configuration.
        context: String,
        /// The rejected textual value.
        value: String,
    },
}

/// Raw gate configuration with string-valued levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Raw level applied to names without any other classification.
    #[serde(default = "default_level_raw")]
    pub default_level: String,
    /// Names always readable without diagnostics unless overridden.
    #[serde(default)]
    pub whitelist: Vec<String>,
    /// Whether the namespace's exported names are implicitly whitelisted.
    #[serde(default = "default_allow_exported")]
    pub allow_exported: bool,
    /// Raw per-name level overrides.
    #[serde(default)]
    pub levels: BTreeMap<String, String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            default_level: default_level_raw(),
            whitelist: Vec::new(),
            allow_exported: default_allow_exported(),
            levels: BTreeMap::new(),
        }
    }
}

impl GateConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the input is not valid TOML or
    /// does not match the configuration shape.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|error| ConfigError::Parse(error.to_string()))
    }

    /// Resolves the raw configuration into typed options.
    ///
    /// Resolution is fail-fast: the first unrecognized level value rejects
    /// the whole configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLevel`] naming the offending entry when
    /// a level value is not one of `ignore`, `warn`, `debug`, or `error`.
    pub fn resolve(&self) -> Result<GateOptions, ConfigError> {
        let default_level =
            AccessLevel::parse(&self.default_level).map_err(|error| ConfigError::InvalidLevel {
                context: "default_level".to_string(),
                value: error.value,
            })?;
        let mut levels = BTreeMap::new();
        for (name, raw) in &self.levels {
            let level = AccessLevel::parse(raw).map_err(|error| ConfigError::InvalidLevel {
                context: format!("levels[{name}]"),
                value: error.value,
            })?;
            levels.insert(MemberName::new(name.clone()), level);
        }
        let whitelist = self
            .whitelist
            .iter()
            .map(|name| MemberName::new(name.clone()))
            .collect();
        Ok(GateOptions {
            default_level,
            whitelist,
            allow_exported: self.allow_exported,
            levels,
        })
    }
}
