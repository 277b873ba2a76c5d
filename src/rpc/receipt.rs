use alloy::network::ReceiptResponse;
use alloy::primitives::{Address, B256};
use alloy::rpc::types::TransactionReceipt;

// receipt view kept after a submitted transaction is confirmed

#[derive(Debug, Clone, PartialEq)]
pub struct TxOutcome {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub success: bool,
    pub contract_address: Option<Address>,
}

impl TxOutcome {
    pub fn success(transaction_hash: B256, gas_used: u64) -> Self {
        Self {
            transaction_hash,
            block_number: None,
            gas_used,
            success: true,
            contract_address: None,
        }
    }

    pub fn with_contract_address(mut self, address: Address) -> Self {
        self.contract_address = Some(address);
        self
    }

    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }
}

impl From<&TransactionReceipt> for TxOutcome {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash(),
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
            success: receipt.status(),
            contract_address: receipt.contract_address(),
        }
    }
}
