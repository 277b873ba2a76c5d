use crate::common::format_ether_short;
use crate::config::{EXPLORER_API_KEY, EnvSource, Network, SIGNER_ADDRESS, SIGNER_PRIVATE_KEY, Settings};
use crate::gas::{GasCalculator, GasConfig};
use crate::rpc::ChainReader;

use super::{CheckOutcome, CheckSection};

pub const FAUCET_URL: &str = "https://faucet.polygon.technology/";

// required and optional variables for the selected network
pub fn check_environment(env: &EnvSource, network: &Network) -> CheckSection {
    let mut section = CheckSection::new("📋 Environment:");

    let mut required = Vec::new();
    if let Some(rpc_env) = network.rpc_env {
        required.push(rpc_env);
    }
    required.extend([SIGNER_PRIVATE_KEY, SIGNER_ADDRESS]);

    for key in required {
        section.push(match env.get(key) {
            Some(_) => CheckOutcome::Pass(format!("{}: configured", key)),
            None => CheckOutcome::Fail(format!("{}: NOT CONFIGURED", key)),
        });
    }

    section.push(match env.get(EXPLORER_API_KEY) {
        Some(_) => CheckOutcome::Pass(format!("{}: configured", EXPLORER_API_KEY)),
        None => CheckOutcome::Warn(format!("{}: not configured (optional)", EXPLORER_API_KEY)),
    });

    section
}

pub async fn check_connectivity<C: ChainReader>(client: &C, network: &Network) -> CheckSection {
    let mut section = CheckSection::new("🌐 RPC connectivity:");

    let chain_id = match client.chain_id().await {
        Ok(chain_id) => chain_id,
        Err(e) => {
            section.push(CheckOutcome::Fail(format!("Connection error: {}", e)));
            return section;
        }
    };

    section.push(CheckOutcome::Pass(format!("Connected to: {}", network.name)));
    if chain_id == network.chain_id {
        section.push(CheckOutcome::Pass(format!("Chain ID: {}", chain_id)));
    } else {
        section.push(CheckOutcome::Warn(format!(
            "Chain ID: {} (expected {} for {})",
            chain_id, network.chain_id, network.name
        )));
    }

    match client.block_number().await {
        Ok(block) => section.push(CheckOutcome::Pass(format!("Latest block: {}", block))),
        Err(e) => section.push(CheckOutcome::Fail(format!("Connection error: {}", e))),
    }

    section
}

pub async fn check_wallet<C: ChainReader>(
    client: &C,
    settings: &Settings,
    gas: &GasConfig,
) -> CheckSection {
    let mut section = CheckSection::new("👛 Signing wallet:");
    let symbol = settings.network.native_symbol;

    let keypair = match settings.signer() {
        Ok(keypair) => keypair,
        Err(e) => {
            section.push(CheckOutcome::Fail(format!("Wallet error: {}", e)));
            return section;
        }
    };

    // a mismatch only warns, the key's own address is what signs
    match settings.signer_address.as_deref() {
        Some(configured) if !keypair.matches_address(configured).unwrap_or(false) => {
            section.push(CheckOutcome::Warn(format!(
                "SIGNER_ADDRESS does not match private key (configured {}, real {}), using the real address",
                configured, keypair.address
            )));
        }
        _ => section.push(CheckOutcome::Pass(format!("Address: {}", keypair.address))),
    }

    let balance = match client.balance(keypair.address).await {
        Ok(balance) => balance,
        Err(e) => {
            section.push(CheckOutcome::Fail(format!("Wallet error: {}", e)));
            return section;
        }
    };

    let shown = format!("Balance: {} {}", format_ether_short(balance, 4), symbol);
    if GasCalculator::has_deploy_balance(balance, gas) {
        section.push(CheckOutcome::Pass(format!("{} (enough to deploy)", shown)));
    } else {
        section.push(CheckOutcome::Fail(format!(
            "{} is low, need at least {} {}. Free testnet tokens: {}",
            shown,
            format_ether_short(gas.min_deploy_balance, 1),
            symbol,
            FAUCET_URL
        )));
    }

    let gas_price = client.gas_price().await.ok().filter(|price| *price > 0);
    let cost = GasCalculator::estimate_deploy_cost(gas_price, gas);
    section.push(CheckOutcome::Pass(format!(
        "Estimated deploy cost: ~{} {}",
        format_ether_short(cost, 4),
        symbol
    )));

    section
}
