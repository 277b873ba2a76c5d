use std::time::Duration;

use alloy::primitives::{Address, B256, Bytes, U256};
use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use tracing::{info, warn};

use super::{SourceVerifier, VerificationRequest, VerifyError};
use crate::config::Network;
use crate::rpc::{ChainWriter, TxOutcome, TxRequest};

pub const DEPLOY_CONFIRMATIONS: u64 = 1;

#[derive(Debug, Clone)]
pub struct DeployReport {
    pub deployer: Address,
    pub balance: U256,
    pub nonce: u64,
    pub contract_address: Address,
    pub transaction_hash: B256,
    pub outcome: TxOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VerificationStatus {
    Verified(String),
    Failed(String),
}

// Local development chains have no explorer to verify against
pub fn should_verify(network: &Network) -> bool {
    !network.is_local
}

/// Deploy creation bytecode at the deployer's current confirmed nonce.
///
/// The nonce is passed explicitly so a stuck pending transaction at that
/// nonce gets replaced instead of queueing behind it.
pub async fn deploy_contract<C: ChainWriter>(
    client: &C,
    bytecode: Bytes,
    gas_price: Option<u128>,
) -> Result<DeployReport> {
    let deployer = client.sender();

    let balance = client
        .balance(deployer)
        .await
        .context("Failed to fetch deployer balance")?;
    let nonce = client
        .confirmed_nonce(deployer)
        .await
        .context("Failed to fetch deployer nonce")?;
    println!("Deploying with account: {}", deployer);
    println!("Account balance: {}", crate::common::format_ether(balance));
    println!("Using nonce: {}", nonce);

    let mut request = TxRequest::create(bytecode, nonce);
    if let Some(gas_price) = gas_price {
        request = request.with_gas_price(gas_price);
    }

    let transaction_hash = client
        .submit(request)
        .await
        .context("Failed to send deployment transaction")?;
    info!(hash = %transaction_hash, nonce, "deployment broadcast");

    let outcome = client
        .wait_for_confirmations(transaction_hash, DEPLOY_CONFIRMATIONS)
        .await
        .context("Deployment transaction was not confirmed")?;

    if !outcome.success {
        return Err(anyhow!(
            "Deployment transaction {} reverted",
            transaction_hash
        ));
    }

    let contract_address = outcome
        .contract_address
        .ok_or_else(|| anyhow!("Receipt for {} has no contract address", transaction_hash))?;

    Ok(DeployReport {
        deployer,
        balance,
        nonce,
        contract_address,
        transaction_hash,
        outcome,
    })
}

/// Wait for explorer indexing, then try to publish the source.
///
/// Never fails: the contract is already live, so every problem here is
/// logged and reported as `VerificationStatus::Failed`.
pub async fn verify_deployment<V: SourceVerifier>(
    verifier: Result<V, VerifyError>,
    request: Result<VerificationRequest, VerifyError>,
    delay: Duration,
) -> VerificationStatus {
    println!(
        "⏳ [{}] Waiting {} seconds before verification...",
        Utc::now().format("%H:%M:%S"),
        delay.as_secs()
    );
    tokio::time::sleep(delay).await;

    let result = match (verifier, request) {
        (Ok(verifier), Ok(request)) => {
            println!("🔍 Verifying contract on block explorer...");
            verifier.verify(&request).await
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    };

    match result {
        Ok(message) => {
            info!(%message, "contract verified");
            VerificationStatus::Verified(message)
        }
        Err(e) => {
            warn!(error = %e, "verification failed");
            VerificationStatus::Failed(e.to_string())
        }
    }
}
