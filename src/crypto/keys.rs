use std::str::FromStr;

use super::KeyError;
use alloy::primitives::{Address, B256};
use alloy_signer_local::coins_bip39::{English, Mnemonic};
use alloy_signer_local::{MnemonicBuilder, PrivateKeySigner};

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub signer: PrivateKeySigner,
    pub address: Address,         // Ethereum-style address
    pub mnemonic: Option<String>, // Only set for freshly generated wallets
}

impl KeyPair {
    // Load a signer from a hex private key, with or without the 0x prefix
    pub fn from_private_key(private_key: &str) -> Result<Self, KeyError> {
        let raw = private_key.trim();
        let raw = raw.strip_prefix("0x").unwrap_or(raw);

        let bytes = hex::decode(raw)?;
        if bytes.len() != 32 {
            return Err(KeyError::InvalidPrivateKey);
        }

        let signer = PrivateKeySigner::from_bytes(&B256::from_slice(&bytes))
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        let address = signer.address();

        Ok(Self {
            signer,
            address,
            mnemonic: None,
        })
    }

    /// Generate a fresh development wallet: random 12 word english mnemonic,
    /// first account on the default m/44'/60'/0'/0/0 path.
    pub fn generate() -> Result<Self, KeyError> {
        let mut rng = rand::thread_rng();
        let phrase = Mnemonic::<English>::new(&mut rng).to_phrase();

        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.as_str())
            .build()
            .map_err(|e| KeyError::Mnemonic(e.to_string()))?;
        let address = signer.address();

        Ok(Self {
            signer,
            address,
            mnemonic: Some(phrase),
        })
    }

    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.signer.to_bytes()))
    }

    // Compare against an operator configured address, ignoring checksum case
    pub fn matches_address(&self, configured: &str) -> Result<bool, KeyError> {
        Ok(parse_address(configured)? == self.address)
    }
}

pub fn parse_address(value: &str) -> Result<Address, KeyError> {
    Address::from_str(value.trim()).map_err(|_| KeyError::InvalidAddress(value.to_string()))
}
