use std::fs;
use std::path::Path;

use alloy::primitives::Bytes;
use serde::Deserialize;

use super::ArtifactError;

/// Compiled contract as written by the hardhat toolchain
/// (`artifacts/contracts/<Source>.sol/<Name>.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub source_name: String,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let content = read(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json)?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(artifact.contract_name));
        }
        Ok(artifact)
    }

    // "contracts/ContractRegistry.sol:ContractRegistry"
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }
}

/// Compiler input and version from `artifacts/build-info/<id>.json`, needed
/// for standard-json source verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub solc_long_version: String,
    pub input: serde_json::Value,
}

impl BuildInfo {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let content = read(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    // explorers expect the "v" prefixed long version
    pub fn compiler_version(&self) -> String {
        format!("v{}", self.solc_long_version)
    }
}

fn read(path: &Path) -> Result<String, ArtifactError> {
    fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}
