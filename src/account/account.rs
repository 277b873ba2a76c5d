use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub balance: U256,
    pub nonce: u64, // confirmed transaction count
    pub address: Address,
}

/// Snapshot of an account as seen by the node, including what is still
/// sitting in the mempool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountStatus {
    pub account: Account,
    pub pending_nonce: u64,
}

impl AccountStatus {
    pub fn confirmed_nonce(&self) -> u64 {
        self.account.nonce
    }

    // number of broadcast transactions that have not been mined yet
    pub fn stuck_transactions(&self) -> u64 {
        self.pending_nonce.saturating_sub(self.account.nonce)
    }

    pub fn has_stuck_transactions(&self) -> bool {
        self.pending_nonce > self.account.nonce
    }
}
