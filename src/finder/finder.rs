use alloy::primitives::Address;
use anyhow::{Context, Result};
use tracing::info;

use super::{NonceRange, contract_address};
use crate::rpc::ChainReader;

// One probed candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
    pub nonce: u64,
    pub address: Address,
    pub has_code: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FinderOutcome {
    Found { nonce: u64, address: Address },
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinderReport {
    pub sender: Address,
    pub range: NonceRange,
    pub probes: Vec<Probe>,
    pub outcome: FinderOutcome,
}

impl FinderReport {
    pub fn found_address(&self) -> Option<Address> {
        match self.outcome {
            FinderOutcome::Found { address, .. } => Some(address),
            FinderOutcome::NotFound => None,
        }
    }
}

/// Scan the sender's CREATE addresses in ascending nonce order and stop at
/// the first one holding bytecode. The lowest deployed nonce wins, which is
/// not necessarily the latest deployment.
pub async fn find_deployed<C: ChainReader>(
    client: &C,
    sender: Address,
    range: NonceRange,
) -> Result<FinderReport> {
    // the range comes from config and may be huge, so grow as we probe
    let mut probes = Vec::new();

    for nonce in range.iter() {
        let address = contract_address(sender, nonce);
        println!("Checking Nonce {} -> {}", nonce, address);

        let code = client
            .code_at(address)
            .await
            .with_context(|| format!("Failed to fetch code at {} (nonce {})", address, nonce))?;

        let has_code = !code.is_empty();
        if !has_code {
            println!("❌ Empty");
        }
        info!(nonce, %address, has_code, "candidate checked");
        probes.push(Probe {
            nonce,
            address,
            has_code,
        });

        if has_code {
            info!(nonce, %address, code_size = code.len(), "deployed contract found");
            return Ok(FinderReport {
                sender,
                range,
                probes,
                outcome: FinderOutcome::Found { nonce, address },
            });
        }
    }

    info!(%sender, start = range.start(), end = range.end(), "no contract in nonce range");
    Ok(FinderReport {
        sender,
        range,
        probes,
        outcome: FinderOutcome::NotFound,
    })
}
