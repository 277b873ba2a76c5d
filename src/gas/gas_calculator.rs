use super::gas_config::GasConfig;
use alloy::primitives::U256;

pub struct GasCalculator;

impl GasCalculator {
    // estimated cost of deploying the registry at the given price
    // falls back to the configured price when the node returns none
    pub fn estimate_deploy_cost(gas_price: Option<u128>, config: &GasConfig) -> U256 {
        let price = gas_price.unwrap_or(config.fallback_gas_price);
        U256::from(config.deploy_gas_estimate) * U256::from(price)
    }

    // validate balance is enough to attempt a deployment
    pub fn has_deploy_balance(balance: U256, config: &GasConfig) -> bool {
        balance >= config.min_deploy_balance
    }
}
