use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed artifact json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Artifact {0} has no creation bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("No explorer verification api for network {0}")]
    Unsupported(String),
    #[error("Explorer api key not configured")]
    MissingApiKey,
    #[error("Compiler build info not configured")]
    MissingBuildInfo,
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error("Explorer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Explorer rejected verification: {0}")]
    Rejected(String),
    #[error("Verification still pending after {attempts} checks")]
    Timeout { attempts: u32 },
}
