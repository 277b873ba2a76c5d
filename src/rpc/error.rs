use alloy::primitives::B256;
use alloy::transports::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Invalid RPC url: {0}")]
    InvalidUrl(String),
    #[error("RPC request failed: {0}")]
    Rpc(#[from] TransportError),
    #[error("Transaction {hash} was not confirmed: {reason}")]
    Confirmation { hash: B256, reason: String },
    #[error("Provider rejected transaction: {0}")]
    Rejected(String),
}
