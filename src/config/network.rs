use super::ConfigError;
use crate::gas::gwei;

/// Static profile of a network the registry can be deployed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub name: &'static str,
    pub chain_id: u64,
    pub rpc_env: Option<&'static str>, // env var holding the rpc url
    pub default_rpc_url: &'static str,
    pub gas_price: Option<u128>, // fixed deploy gas price, None lets the node price it
    pub explorer_url: Option<&'static str>,
    pub verify_api_url: Option<&'static str>,
    pub native_symbol: &'static str,
    pub is_local: bool,
}

const LOCAL_RPC_URL: &str = "http://127.0.0.1:8545";

impl Network {
    pub fn by_name(name: &str) -> Result<Self, ConfigError> {
        let network = match name.trim().to_lowercase().as_str() {
            "hardhat" => Self::local("hardhat"),
            "localhost" => Self::local("localhost"),
            "mumbai" => Self {
                name: "mumbai",
                chain_id: 80001,
                rpc_env: Some("POLYGON_MUMBAI_RPC_URL"),
                default_rpc_url: "https://rpc-mumbai.maticvigil.com",
                gas_price: Some(gwei(20)),
                explorer_url: Some("https://mumbai.polygonscan.com"),
                verify_api_url: Some("https://api-testnet.polygonscan.com/api"),
                native_symbol: "MATIC",
                is_local: false,
            },
            "amoy" => Self {
                name: "amoy",
                chain_id: 80002,
                rpc_env: Some("POLYGON_AMOY_RPC_URL"),
                default_rpc_url: "https://rpc-amoy.polygon.technology",
                gas_price: None,
                explorer_url: Some("https://amoy.polygonscan.com"),
                verify_api_url: Some("https://api-amoy.polygonscan.com/api"),
                native_symbol: "MATIC",
                is_local: false,
            },
            "polygon" => Self {
                name: "polygon",
                chain_id: 137,
                rpc_env: Some("POLYGON_RPC_URL"),
                default_rpc_url: "https://polygon-rpc.com",
                gas_price: Some(gwei(50)),
                explorer_url: Some("https://polygonscan.com"),
                verify_api_url: Some("https://api.polygonscan.com/api"),
                native_symbol: "MATIC",
                is_local: false,
            },
            other => return Err(ConfigError::UnknownNetwork(other.to_string())),
        };
        Ok(network)
    }

    fn local(name: &'static str) -> Self {
        Self {
            name,
            chain_id: 31337,
            rpc_env: None,
            default_rpc_url: LOCAL_RPC_URL,
            gas_price: None,
            explorer_url: None,
            verify_api_url: None,
            native_symbol: "ETH",
            is_local: true,
        }
    }

    pub fn address_url(&self, address: &str) -> Option<String> {
        self.explorer_url
            .map(|base| format!("{}/address/{}", base, address))
    }
}
