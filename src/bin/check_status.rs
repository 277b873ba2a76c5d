use anyhow::Result;
use registry_ops::account::fetch_status;
use registry_ops::common::{DOTENV_PATH, format_ether};
use registry_ops::logging::init_tracing;
use registry_ops::{EnvSource, RpcChain, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("🔍 Checking account status...");

    let env = EnvSource::load(DOTENV_PATH);
    let settings = Settings::from_env(&env)?;
    let address = settings.sender_address()?;

    let client = RpcChain::connect(&settings.rpc_url)?;
    let status = fetch_status(&client, address).await?;

    println!("Account: {}", address);
    println!(
        "Balance: {} {}",
        format_ether(status.account.balance),
        settings.network.native_symbol
    );
    println!("Confirmed Nonce: {}", status.confirmed_nonce());
    println!("Pending Nonce: {}", status.pending_nonce);

    if status.has_stuck_transactions() {
        println!(
            "\n⚠️  {} transaction(s) stuck in the mempool, run clean-nonce to replace them.",
            status.stuck_transactions()
        );
    } else if status.confirmed_nonce() == 0 {
        println!("\nNo transactions have been mined from this account yet.");
    } else {
        println!("\n✅ No stuck transactions.");
    }

    Ok(())
}
