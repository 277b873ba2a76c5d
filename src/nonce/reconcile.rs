use alloy::primitives::{Address, B256, U256};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::account::Account;
use crate::gas::GasConfig;
use crate::rpc::{ChainWriter, TxOutcome, TxRequest};

pub const REQUIRED_CONFIRMATIONS: u64 = 1;

#[derive(Debug, Clone)]
pub struct ReconcileReport {
    pub account: Account,
    pub transaction_hash: B256,
    pub outcome: TxOutcome,
}

/// Zero value self transfer at the confirmed nonce, priced high enough to
/// replace whatever is pending at that nonce. Balance plays no part in it.
pub fn replacement_transaction(sender: Address, confirmed_nonce: u64, gas: &GasConfig) -> TxRequest {
    TxRequest::transfer(sender, U256::ZERO, confirmed_nonce)
        .with_gas_limit(gas.transfer_gas_limit)
        .with_gas_price(gas.replacement_gas_price)
}

/// Read balance and confirmed nonce straight from the node, then push the
/// replacement transaction and wait for one confirmation. No retries: any
/// rejection (e.g. not enough balance for gas) is returned to the caller.
pub async fn reconcile_nonce<C: ChainWriter>(client: &C, gas: &GasConfig) -> Result<ReconcileReport> {
    let address = client.sender();

    let balance = client
        .balance(address)
        .await
        .context("Failed to fetch balance")?;
    let nonce = client
        .confirmed_nonce(address)
        .await
        .context("Failed to fetch confirmed nonce")?;

    println!("Address: {}", address);
    println!("Balance: {}", crate::common::format_ether(balance));
    println!("Current Confirmed Nonce: {}", nonce);

    let request = replacement_transaction(address, nonce, gas);
    if let Some(cost) = request.max_transaction_cost() {
        if cost > balance {
            warn!(%cost, %balance, "balance below replacement cost, node will likely reject");
        }
    }

    let transaction_hash = client
        .submit(request)
        .await
        .context("Failed to send replacement transaction")?;
    println!("Transaction sent: {}", transaction_hash);

    println!("Waiting for confirmation...");
    let outcome = client
        .wait_for_confirmations(transaction_hash, REQUIRED_CONFIRMATIONS)
        .await
        .context("Replacement transaction was not confirmed")?;

    info!(hash = %transaction_hash, nonce, "nonce advanced");
    Ok(ReconcileReport {
        account: Account {
            balance,
            nonce,
            address,
        },
        transaction_hash,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::gwei;
    use crate::rpc::{MockCall, MockChain};
    use alloy::primitives::address;

    const SENDER: Address = address!("0x00000000000000000000000000000000000000a1");

    #[test]
    fn test_replacement_is_zero_value_self_transfer() {
        let gas = GasConfig::default();
        let request = replacement_transaction(SENDER, 4, &gas);

        assert_eq!(request.to, Some(SENDER));
        assert_eq!(request.value, U256::ZERO);
        assert_eq!(request.nonce, 4);
        assert_eq!(request.gas_limit, Some(21_000));
        assert_eq!(request.gas_price, Some(gwei(200)));
    }

    #[test]
    fn test_replacement_cost_is_limit_times_price() {
        let request = replacement_transaction(SENDER, 0, &GasConfig::default());
        // 21000 * 200 gwei = 0.0042 native token
        assert_eq!(
            request.max_transaction_cost(),
            Some(U256::from(4_200_000_000_000_000u128))
        );
    }

    #[tokio::test]
    async fn test_reconcile_uses_confirmed_not_pending_nonce() -> Result<()> {
        let chain = MockChain::new(SENDER)
            .with_balance(SENDER, U256::from(10).pow(U256::from(18)))
            .with_nonces(SENDER, 2, 5);

        let report = reconcile_nonce(&chain, &GasConfig::default()).await?;

        let submitted = chain.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].nonce, 2);
        assert_eq!(submitted[0].to, Some(SENDER));
        assert_eq!(submitted[0].value, U256::ZERO);

        assert_eq!(report.account.nonce, 2);
        assert!(report.outcome.success);
        assert!(
            chain
                .calls()
                .contains(&MockCall::Wait(report.transaction_hash, 1))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_balance_still_sends_zero_value() -> Result<()> {
        let chain = MockChain::new(SENDER).with_nonces(SENDER, 0, 1);

        reconcile_nonce(&chain, &GasConfig::default()).await?;

        let submitted = chain.submitted();
        assert_eq!(submitted[0].value, U256::ZERO);
        assert_eq!(submitted[0].to, Some(SENDER));
        Ok(())
    }

    #[tokio::test]
    async fn test_rejection_propagates_without_retry() {
        let chain = MockChain::new(SENDER).rejecting("insufficient funds for gas * price + value");

        let result = reconcile_nonce(&chain, &GasConfig::default()).await;

        assert!(result.is_err());
        assert_eq!(chain.submitted().len(), 1);
        assert!(!chain.calls().iter().any(|c| matches!(c, MockCall::Wait(..))));
    }
}
