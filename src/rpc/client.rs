use alloy::primitives::{Address, B256, Bytes, U256};

use super::{ChainError, TxOutcome, TxRequest};

/// Read-only view of an Ethereum-compatible chain.
///
/// Every call goes to the node; nothing is cached between calls so each run
/// sees the authoritative balance, nonce and bytecode.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    async fn chain_id(&self) -> Result<u64, ChainError>;

    async fn block_number(&self) -> Result<u64, ChainError>;

    async fn gas_price(&self) -> Result<u128, ChainError>;

    async fn balance(&self, address: Address) -> Result<U256, ChainError>;

    /// Mined transaction count (`latest`).
    async fn confirmed_nonce(&self, address: Address) -> Result<u64, ChainError>;

    /// Mined plus broadcast transaction count (`pending`).
    async fn pending_nonce(&self, address: Address) -> Result<u64, ChainError>;

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError>;
}

/// A chain client holding a signing key.
#[allow(async_fn_in_trait)]
pub trait ChainWriter: ChainReader {
    fn sender(&self) -> Address;

    /// Sign and broadcast, returning the transaction hash.
    async fn submit(&self, request: TxRequest) -> Result<B256, ChainError>;

    /// Block until the transaction has the given number of confirmations.
    async fn wait_for_confirmations(
        &self,
        hash: B256,
        confirmations: u64,
    ) -> Result<TxOutcome, ChainError>;
}
