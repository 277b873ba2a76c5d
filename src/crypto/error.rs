#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid private key format")]
    InvalidPrivateKey,
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
    #[error("Mnemonic error: {0}")]
    Mnemonic(String),
}
