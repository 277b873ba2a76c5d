use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use serde::{Deserialize, Serialize};

// Transient transaction request, built per invocation and dropped once the
// hash is known. `to: None` is a contract creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxRequest {
    pub to: Option<Address>, // Receiver address
    pub value: U256,         // Amount to transfer
    pub nonce: u64,          // Always explicit, never left to the provider

    // GAS FIELDS, left to the node when unset
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u128>,

    pub input: Bytes,
}

impl TxRequest {
    pub fn transfer(to: Address, value: U256, nonce: u64) -> Self {
        Self {
            to: Some(to),
            value,
            nonce,
            gas_limit: None,
            gas_price: None,
            input: Bytes::new(),
        }
    }

    pub fn create(code: Bytes, nonce: u64) -> Self {
        Self {
            to: None,
            value: U256::ZERO,
            nonce,
            gas_limit: None,
            gas_price: None,
            input: code,
        }
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    pub fn is_create(&self) -> bool {
        self.to.is_none()
    }

    // Helper for gas calculations, only known once both gas fields are set
    pub fn max_transaction_cost(&self) -> Option<U256> {
        let gas_limit = self.gas_limit?;
        let gas_price = self.gas_price?;
        Some(self.value + U256::from(gas_limit) * U256::from(gas_price))
    }

    // convert into the alloy request sent over json-rpc
    pub fn into_rpc_request(self, from: Address) -> TransactionRequest {
        let mut request = TransactionRequest::default()
            .with_from(from)
            .with_value(self.value)
            .with_nonce(self.nonce);

        request = match self.to {
            Some(to) => request.with_to(to).with_input(self.input),
            None => request.with_deploy_code(self.input),
        };

        if let Some(gas_limit) = self.gas_limit {
            request = request.with_gas_limit(gas_limit);
        }
        if let Some(gas_price) = self.gas_price {
            request = request.with_gas_price(gas_price);
        }

        request
    }
}
