pub mod account;
pub mod common;
pub mod config;
pub mod crypto;
pub mod dashboard;
pub mod deploy;
pub mod finder;
pub mod gas;
pub mod logging;
pub mod nonce;
pub mod rpc;
pub mod setup;

// Re-export commonly used types for convenience
pub use account::{Account, AccountStatus};
pub use config::{EnvSource, Network, Settings};
pub use crypto::{KeyError, KeyPair};
pub use finder::{FinderOutcome, NonceRange, contract_address, find_deployed};
pub use gas::GasConfig;
pub use nonce::reconcile_nonce;
pub use rpc::{ChainReader, ChainWriter, MockChain, RpcChain, SignerChain, TxRequest};

// Export anyhow::Result for convenience
pub use anyhow::Result;
