use alloy::primitives::U256;

const GWEI: u128 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct GasConfig {
    pub transfer_gas_limit: u64,     // Plain value transfer, like Ethereum
    pub replacement_gas_price: u128, // Far above baseline to outbid a stuck tx
    pub deploy_gas_estimate: u64,    // Rough cost of the registry creation
    pub fallback_gas_price: u128,    // Used when the node gives no price
    pub min_deploy_balance: U256,    // Below this, deploying is not attempted
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            transfer_gas_limit: 21_000,
            replacement_gas_price: 200 * GWEI,
            deploy_gas_estimate: 500_000,
            fallback_gas_price: 30 * GWEI,
            min_deploy_balance: U256::from(100_000_000_000_000_000u128), // 0.1 native token
        }
    }
}

pub fn gwei(amount: u128) -> u128 {
    amount * GWEI
}
