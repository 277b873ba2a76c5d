pub mod gas_calculator;
pub mod gas_config;

pub use gas_calculator::*;
pub use gas_config::*;
