// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! The token contract is compiled outside of this workspace. Its artifact is the usual JSON file
//! holding the ABI and the creation bytecode.

use std::{fs, path::Path};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

/// Where the artifact of the token contract is written by the Solidity toolchain.
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/MeMeToken.sol/MeMeToken.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("artifact for {0} has no creation bytecode (is the contract abstract?)")]
    EmptyBytecode(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    #[serde(default)]
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json)?;
        if artifact.bytecode.is_empty() {
            let name = artifact.contract_name.clone().unwrap_or_default();
            return Err(ArtifactError::EmptyBytecode(name));
        }
        Ok(artifact)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.constructor()
    }
}
