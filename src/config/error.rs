use crate::crypto::KeyError;
use crate::finder::NonceRangeError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Unknown network: {0} (expected hardhat, localhost, mumbai, amoy or polygon)")]
    UnknownNetwork(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: String, value: String },
    #[error(transparent)]
    InvalidRange(#[from] NonceRangeError),
    #[error(transparent)]
    Key(#[from] KeyError),
}
