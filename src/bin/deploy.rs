use std::time::Duration;

use anyhow::{Context, Result};
use registry_ops::common::{DOTENV_PATH, VERIFICATION_DELAY_SECS, format_ether};
use registry_ops::deploy::{
    ContractArtifact, EtherscanVerifier, VerificationRequest, VerificationStatus, deploy_contract,
    should_verify, verify_deployment,
};
use registry_ops::logging::init_tracing;
use registry_ops::{EnvSource, Settings, SignerChain};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let env = EnvSource::load(DOTENV_PATH);
    let settings = Settings::from_env(&env)?;
    let network = &settings.network;

    let artifact = ContractArtifact::load(&settings.artifact_path).with_context(|| {
        format!(
            "Failed to load contract artifact {}",
            settings.artifact_path.display()
        )
    })?;

    println!("🚀 Deploying {}...", artifact.contract_name);
    println!("Network: {}", network.name);

    let keypair = settings.signer().context("A signing key is required")?;
    let client = SignerChain::connect(&settings.rpc_url, &keypair)?;

    let report = deploy_contract(&client, artifact.bytecode.clone(), network.gas_price).await?;
    let address = report.contract_address.to_string();

    println!("✅ {} deployed to: {}", artifact.contract_name, address);
    println!(
        "Deployer balance before deploy: {} {}",
        format_ether(report.balance),
        network.native_symbol
    );
    println!();
    println!("📝 Save these values to your .env:");
    println!("CONTRACT_REGISTRY_ADDRESS={}", address);
    println!("SIGNER_ADDRESS={}", report.deployer);
    println!();

    if let Some(url) = network.address_url(&address) {
        println!("🔍 View on block explorer:");
        println!("{}", url);
        println!();
    }

    if !should_verify(network) {
        return Ok(());
    }

    let verifier = EtherscanVerifier::from_settings(&settings);
    let request = VerificationRequest::from_build_info_path(
        report.contract_address,
        &artifact,
        settings.build_info_path.as_deref(),
    );

    match verify_deployment(
        verifier,
        request,
        Duration::from_secs(VERIFICATION_DELAY_SECS),
    )
    .await
    {
        VerificationStatus::Verified(message) => println!("✅ Contract verified! ({})", message),
        VerificationStatus::Failed(reason) => println!("❌ Verification failed: {}", reason),
    }

    Ok(())
}
