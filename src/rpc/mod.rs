pub mod client;
pub mod error;
pub mod mock;
pub mod provider;
pub mod receipt;
pub mod transaction;

pub use client::*;
pub use error::*;
pub use mock::{MockCall, MockChain};
pub use provider::{RpcChain, SignerChain};
pub use receipt::*;
pub use transaction::*;
