use alloy::primitives::Address;
use anyhow::{Context, Result};

use super::{Account, AccountStatus};
use crate::rpc::ChainReader;

// Fresh read of balance, confirmed and pending nonce
pub async fn fetch_status<C: ChainReader>(client: &C, address: Address) -> Result<AccountStatus> {
    let balance = client
        .balance(address)
        .await
        .context("Failed to fetch balance")?;
    let nonce = client
        .confirmed_nonce(address)
        .await
        .context("Failed to fetch confirmed nonce")?;
    let pending_nonce = client
        .pending_nonce(address)
        .await
        .context("Failed to fetch pending nonce")?;

    Ok(AccountStatus {
        account: Account {
            balance,
            nonce,
            address,
        },
        pending_nonce,
    })
}
