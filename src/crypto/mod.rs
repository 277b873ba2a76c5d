pub mod error;
pub mod keys;

pub use error::*;
pub use keys::*;
