use alloy::eips::BlockId;
use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use tracing::{debug, info};

use super::{ChainError, ChainReader, ChainWriter, TxOutcome, TxRequest};
use crate::crypto::KeyPair;

/// Read-only JSON-RPC chain client over alloy's http provider.
#[derive(Clone)]
pub struct RpcChain {
    provider: DynProvider,
}

impl RpcChain {
    pub fn connect(rpc_url: &str) -> Result<Self, ChainError> {
        let url = parse_url(rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        debug!(%rpc_url, "connected read-only provider");
        Ok(Self { provider })
    }
}

/// Chain client that signs with a local key. Only this type can submit.
#[derive(Clone)]
pub struct SignerChain {
    reader: RpcChain,
    sender: Address,
}

impl SignerChain {
    pub fn connect(rpc_url: &str, keypair: &KeyPair) -> Result<Self, ChainError> {
        let url = parse_url(rpc_url)?;
        let provider = ProviderBuilder::new()
            .wallet(keypair.signer.clone())
            .connect_http(url)
            .erased();

        debug!(%rpc_url, sender = %keypair.address, "connected signing provider");
        Ok(Self {
            reader: RpcChain { provider },
            sender: keypair.address,
        })
    }

    fn provider(&self) -> &DynProvider {
        &self.reader.provider
    }
}

fn parse_url(rpc_url: &str) -> Result<Url, ChainError> {
    rpc_url
        .parse()
        .map_err(|_| ChainError::InvalidUrl(rpc_url.to_string()))
}

impl ChainReader for RpcChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn gas_price(&self) -> Result<u128, ChainError> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn balance(&self, address: Address) -> Result<U256, ChainError> {
        Ok(self.provider.get_balance(address).await?)
    }

    async fn confirmed_nonce(&self, address: Address) -> Result<u64, ChainError> {
        Ok(self
            .provider
            .get_transaction_count(address)
            .block_id(BlockId::latest())
            .await?)
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64, ChainError> {
        Ok(self
            .provider
            .get_transaction_count(address)
            .block_id(BlockId::pending())
            .await?)
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError> {
        Ok(self.provider.get_code_at(address).await?)
    }
}

impl ChainReader for SignerChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        self.reader.chain_id().await
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        self.reader.block_number().await
    }

    async fn gas_price(&self) -> Result<u128, ChainError> {
        self.reader.gas_price().await
    }

    async fn balance(&self, address: Address) -> Result<U256, ChainError> {
        self.reader.balance(address).await
    }

    async fn confirmed_nonce(&self, address: Address) -> Result<u64, ChainError> {
        self.reader.confirmed_nonce(address).await
    }

    async fn pending_nonce(&self, address: Address) -> Result<u64, ChainError> {
        self.reader.pending_nonce(address).await
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, ChainError> {
        self.reader.code_at(address).await
    }
}

impl ChainWriter for SignerChain {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn submit(&self, request: TxRequest) -> Result<B256, ChainError> {
        let from = self.sender;
        let nonce = request.nonce;

        let pending = self
            .provider()
            .send_transaction(request.into_rpc_request(from))
            .await
            .map_err(|e| ChainError::Rejected(e.to_string()))?;

        let hash = *pending.tx_hash();
        info!(%hash, %from, nonce, "transaction broadcast");
        Ok(hash)
    }

    async fn wait_for_confirmations(
        &self,
        hash: B256,
        confirmations: u64,
    ) -> Result<TxOutcome, ChainError> {
        let receipt = PendingTransactionBuilder::new(self.provider().root().clone(), hash)
            .with_required_confirmations(confirmations)
            .get_receipt()
            .await
            .map_err(|e| ChainError::Confirmation {
                hash,
                reason: e.to_string(),
            })?;

        let outcome = TxOutcome::from(&receipt);
        debug!(%hash, block = ?outcome.block_number, gas_used = outcome.gas_used, "receipt received");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // hardhat account #0
    const HARDHAT_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_signer_chain_sends_from_key_address() {
        let keypair = KeyPair::from_private_key(HARDHAT_KEY).unwrap();
        let chain = SignerChain::connect("http://127.0.0.1:8545", &keypair).unwrap();
        assert_eq!(chain.sender(), keypair.address);
        assert_ne!(chain.sender(), Address::ZERO);
    }

    #[test]
    fn test_bad_url_rejected() {
        assert!(matches!(
            RpcChain::connect("not a url"),
            Err(ChainError::InvalidUrl(_))
        ));
        let keypair = KeyPair::from_private_key(HARDHAT_KEY).unwrap();
        assert!(matches!(
            SignerChain::connect("not a url", &keypair),
            Err(ChainError::InvalidUrl(_))
        ));
    }
}
