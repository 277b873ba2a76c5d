use std::path::PathBuf;

use alloy::primitives::Address;

use super::{ConfigError, EnvSource, Network};
use crate::common::{DEFAULT_ARTIFACT_PATH, DEFAULT_NETWORK};
use crate::crypto::{KeyPair, parse_address};
use crate::finder::{DEFAULT_END_NONCE, DEFAULT_START_NONCE, NonceRange};

pub const SIGNER_PRIVATE_KEY: &str = "SIGNER_PRIVATE_KEY";
pub const SIGNER_ADDRESS: &str = "SIGNER_ADDRESS";
pub const EXPLORER_API_KEY: &str = "POLYGONSCAN_API_KEY";

/// Everything the registry binaries read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub network: Network,
    pub rpc_url: String,
    pub private_key: Option<String>,
    pub signer_address: Option<String>,
    pub explorer_api_key: Option<String>,
    pub artifact_path: PathBuf,
    pub build_info_path: Option<PathBuf>,
    pub finder_range: NonceRange,
}

impl Settings {
    pub fn from_env(env: &EnvSource) -> Result<Self, ConfigError> {
        let network_name = env
            .get("NETWORK")
            .unwrap_or_else(|| DEFAULT_NETWORK.to_string());
        let network = Network::by_name(&network_name)?;

        let rpc_url = network
            .rpc_env
            .and_then(|key| env.get(key))
            .unwrap_or_else(|| network.default_rpc_url.to_string());

        let finder_range = NonceRange::new(
            env.get_u64("FINDER_NONCE_START", DEFAULT_START_NONCE)?,
            env.get_u64("FINDER_NONCE_END", DEFAULT_END_NONCE)?,
        )?;

        Ok(Self {
            network,
            rpc_url,
            private_key: env.get(SIGNER_PRIVATE_KEY),
            signer_address: env.get(SIGNER_ADDRESS),
            explorer_api_key: env.get(EXPLORER_API_KEY),
            artifact_path: env
                .get("CONTRACT_ARTIFACT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH)),
            build_info_path: env.get("CONTRACT_BUILD_INFO").map(PathBuf::from),
            finder_range,
        })
    }

    pub fn signer(&self) -> Result<KeyPair, ConfigError> {
        let key = self
            .private_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar(SIGNER_PRIVATE_KEY.to_string()))?;
        Ok(KeyPair::from_private_key(key)?)
    }

    // SIGNER_ADDRESS when set, otherwise derived from the private key
    pub fn sender_address(&self) -> Result<Address, ConfigError> {
        match self.signer_address.as_deref() {
            Some(address) => Ok(parse_address(address)?),
            None => Ok(self.signer()?.address),
        }
    }
}
