use std::collections::HashMap;
use std::sync::Mutex;

use alloy::primitives::{Address, B256, Bytes, U256, keccak256};
use alloy::transports::TransportErrorKind;

use super::{ChainError, ChainReader, ChainWriter, TxOutcome, TxRequest};

// Every call made against the mock chain, in order
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ChainId,
    BlockNumber,
    GasPrice,
    Balance(Address),
    ConfirmedNonce(Address),
    PendingNonce(Address),
    Code(Address),
    Submit(TxRequest),
    Wait(B256, u64),
}

/// In-memory chain used by tests: fixed state, recorded calls, and
/// contract creations that leave code at the derived address.
pub struct MockChain {
    pub chain_id: u64,
    pub block_number: u64,
    pub gas_price: u128,
    sender: Address,
    balances: HashMap<Address, U256>,
    confirmed_nonces: HashMap<Address, u64>,
    pending_nonces: HashMap<Address, u64>,
    code: Mutex<HashMap<Address, Bytes>>,
    outcomes: Mutex<HashMap<B256, TxOutcome>>,
    reject_with: Option<String>,
    broken_code: Vec<Address>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockChain {
    pub fn new(sender: Address) -> Self {
        Self {
            chain_id: 31337,
            block_number: 1,
            gas_price: 1_000_000_000,
            sender,
            balances: HashMap::new(),
            confirmed_nonces: HashMap::new(),
            pending_nonces: HashMap::new(),
            code: Mutex::new(HashMap::new()),
            outcomes: Mutex::new(HashMap::new()),
            reject_with: None,
            broken_code: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_balance(mut self, address: Address, balance: U256) -> Self {
        self.balances.insert(address, balance);
        self
    }

    pub fn with_nonces(mut self, address: Address, confirmed: u64, pending: u64) -> Self {
        self.confirmed_nonces.insert(address, confirmed);
        self.pending_nonces.insert(address, pending);
        self
    }

    pub fn with_code(self, address: Address, code: Bytes) -> Self {
        self.lock_code().insert(address, code);
        self
    }

    // every submit fails with this provider message
    pub fn rejecting(mut self, reason: &str) -> Self {
        self.reject_with = Some(reason.to_string());
        self
    }

    // code lookups at this address fail like a dropped rpc request
    pub fn failing_code_at(mut self, address: Address) -> Self {
        self.broken_code.push(address);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn code_lookups(&self) -> Vec<Address> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Code(address) => Some(address),
                _ => None,
            })
            .collect()
    }

    pub fn submitted(&self) -> Vec<TxRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Submit(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn lock_code(&self) -> std::sync::MutexGuard<'_, HashMap<Address, Bytes>> {
        self.code.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ChainReader for MockChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        self.record(MockCall::ChainId);
        Ok(self.chain_id)
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        self.record(MockCall::BlockNumber);
        Ok(self.block_number)
    }

    async fn gas_price(&self) -> Result<u128, ChainError> {
        self.record(MockCall::GasPrice);
        Ok(self.gas_price)
    }

    async fn balance(&self, address: Address) -> Result<U256, ChainError> {
        self.record(MockCall::Balance(address));
        Ok(self.balances.get(&address).copied().unwrap_or_default())
    }

    async fn confirmed_nonce(&self, address: Address) -> Result<u64, ChainError> {
        self.record(MockCall::ConfirmedNonce(address));
        Ok(self.confirmed_nonces.get(&address).copied().unwrap_or(0))
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64, ChainError> {
        self.record(MockCall::PendingNonce(address));
        Ok(self.pending_nonces.get(&address).copied().unwrap_or(0))
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError> {
        self.record(MockCall::Code(address));
        if self.broken_code.contains(&address) {
            return Err(ChainError::Rpc(TransportErrorKind::custom_str(
                "connection reset by peer",
            )));
        }
        Ok(self.lock_code().get(&address).cloned().unwrap_or_default())
    }
}

impl ChainWriter for MockChain {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn submit(&self, request: TxRequest) -> Result<B256, ChainError> {
        self.record(MockCall::Submit(request.clone()));

        if let Some(reason) = &self.reject_with {
            return Err(ChainError::Rejected(reason.clone()));
        }

        let mut data = Vec::new();
        data.extend_from_slice(self.sender.as_slice());
        data.extend_from_slice(&request.nonce.to_be_bytes());
        let hash = keccak256(data);

        let mut outcome = TxOutcome::success(hash, request.gas_limit.unwrap_or(21_000))
            .with_block_number(self.block_number + 1);
        if request.is_create() {
            let contract = self.sender.create(request.nonce);
            self.lock_code().insert(contract, request.input.clone());
            outcome = outcome.with_contract_address(contract);
        }

        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.insert(hash, outcome);
        }
        Ok(hash)
    }

    async fn wait_for_confirmations(
        &self,
        hash: B256,
        confirmations: u64,
    ) -> Result<TxOutcome, ChainError> {
        self.record(MockCall::Wait(hash, confirmations));
        self.outcomes
            .lock()
            .ok()
            .and_then(|outcomes| outcomes.get(&hash).cloned())
            .ok_or_else(|| ChainError::Confirmation {
                hash,
                reason: "unknown transaction".to_string(),
            })
    }
}
