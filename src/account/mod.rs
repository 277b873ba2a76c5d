pub mod account;
pub mod status;

pub use account::*;
pub use status::*;
