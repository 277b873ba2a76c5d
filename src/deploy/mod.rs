pub mod artifact;
pub mod deployer;
pub mod error;
pub mod verifier;

pub use artifact::*;
pub use deployer::*;
pub use error::*;
pub use verifier::*;
