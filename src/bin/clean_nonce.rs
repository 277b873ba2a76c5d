use anyhow::{Context, Result};
use registry_ops::common::DOTENV_PATH;
use registry_ops::logging::init_tracing;
use registry_ops::{EnvSource, GasConfig, Settings, SignerChain, reconcile_nonce};

// Replaces a stuck pending transaction by re-using the confirmed nonce with a
// zero value self transfer at a very high gas price.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    println!("🧹 Cleaning pending nonce...");

    let env = EnvSource::load(DOTENV_PATH);
    let settings = Settings::from_env(&env)?;
    let keypair = settings.signer().context("A signing key is required")?;

    // straight to the node, no cached nonce
    let client = SignerChain::connect(&settings.rpc_url, &keypair)?;

    let report = reconcile_nonce(&client, &GasConfig::default()).await?;

    println!(
        "✅ Nonce cleared/advanced! (nonce {} mined in block {})",
        report.account.nonce,
        report
            .outcome
            .block_number
            .map(|b| b.to_string())
            .unwrap_or_else(|| "?".to_string())
    );
    Ok(())
}
