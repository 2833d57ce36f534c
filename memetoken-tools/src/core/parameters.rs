// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Named parameters supplied to deployment modules.
//!
//! Parameters can come from a JSON parameters file keyed by module id, e.g.
//!
//! ```json
//! { "MeMeTokenDeployer": { "initialSupply": "123", "uniswapRouter": "0x..." } }
//! ```
//!
//! and from individual overrides given on the command line, which take precedence.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParametersError {
    #[error("failed to read parameters file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed parameters file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parameter {module}.{name} must be a string or an unsigned integer, got {value}")]
    InvalidValue {
        module: String,
        name: String,
        value: Value,
    },
}

/// Parameter values for a single module. Values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleParameters(BTreeMap<String, String>);

impl ModuleParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`ModuleParameters::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Overlay `other` on top of these parameters.
    pub fn merge(&mut self, other: ModuleParameters) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Contents of a parameters file, keyed by module id.
#[derive(Debug, Default)]
pub struct ParametersFile(HashMap<String, serde_json::Map<String, Value>>);

impl ParametersFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParametersError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ParametersError> {
        Ok(Self(serde_json::from_str(json)?))
    }

    /// Parameters for the given module, empty if the file does not mention it.
    pub fn module(&self, module_id: &str) -> Result<ModuleParameters, ParametersError> {
        let mut params = ModuleParameters::new();
        let Some(entries) = self.0.get(module_id) else {
            return Ok(params);
        };
        for (name, value) in entries {
            let text = match value {
                Value::String(s) => s.clone(),
                // Larger amounts lose precision as JSON numbers and must be given as strings
                Value::Number(n) if n.is_u64() => n.to_string(),
                _ => {
                    return Err(ParametersError::InvalidValue {
                        module: module_id.to_string(),
                        name: name.clone(),
                        value: value.clone(),
                    })
                }
            };
            params.set(name.clone(), text);
        }
        Ok(params)
    }
}
