// Seconds to let the block explorer index a fresh contract before verifying
pub const VERIFICATION_DELAY_SECS: u64 = 30;
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/ContractRegistry.sol/ContractRegistry.json";
pub const DEFAULT_NETWORK: &str = "amoy";
pub const DEFAULT_DASHBOARD_API_URL: &str = "http://localhost:8000";
pub const DOTENV_PATH: &str = ".env";
