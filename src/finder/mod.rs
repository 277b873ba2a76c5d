pub mod create_address;
pub mod finder;
pub mod nonce_range;

pub use create_address::*;
pub use finder::*;
pub use nonce_range::*;
