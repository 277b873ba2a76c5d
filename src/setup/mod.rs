pub mod checks;
pub mod report;

pub use checks::*;
pub use report::*;
