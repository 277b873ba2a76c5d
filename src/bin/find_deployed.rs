use anyhow::Result;
use registry_ops::common::DOTENV_PATH;
use registry_ops::logging::init_tracing;
use registry_ops::{EnvSource, FinderOutcome, RpcChain, Settings, find_deployed};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("🕵️  Searching for deployed contracts...");

    let env = EnvSource::load(DOTENV_PATH);
    let settings = Settings::from_env(&env)?;
    let sender = settings.sender_address()?;
    let range = settings.finder_range;

    println!("Sender: {}", sender);

    let client = RpcChain::connect(&settings.rpc_url)?;
    let report = find_deployed(&client, sender, range).await?;

    match report.outcome {
        FinderOutcome::Found { nonce, address } => {
            println!("✅ FOUND! Contract at nonce {}", nonce);
            println!("📍 ADDRESS: {}", address);
            if let Some(url) = settings.network.address_url(&address.to_string()) {
                println!("🔗 View: {}", url);
            }
        }
        FinderOutcome::NotFound => {
            println!(
                "No contracts found for nonces {} to {}.",
                range.start(),
                range.end()
            );
        }
    }

    Ok(())
}
