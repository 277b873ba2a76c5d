pub mod env;
pub mod error;
pub mod network;
pub mod settings;

pub use env::*;
pub use error::*;
pub use network::*;
pub use settings::*;
