use alloy::primitives::{Address, Bytes, U256, address};
use anyhow::Result;
use registry_ops::account::fetch_status;
use registry_ops::deploy::{ContractArtifact, deploy_contract};
use registry_ops::{FinderOutcome, GasConfig, MockChain, NonceRange, find_deployed, reconcile_nonce};

const DEPLOYER: Address = address!("0x00000000000000000000000000000000de910e12");

// Helper functions for realistic amounts
fn ether_to_wei(ether: u64) -> U256 {
    U256::from(ether) * U256::from(10_u64.pow(18)) // 1 ETH = 10^18 wei
}

fn write_artifact(dir: &tempfile::TempDir) -> Result<std::path::PathBuf> {
    let path = dir.path().join("ContractRegistry.json");
    std::fs::write(
        &path,
        r#"{
            "contractName": "ContractRegistry",
            "sourceName": "contracts/ContractRegistry.sol",
            "abi": [],
            "bytecode": "0x6080604052348015600f57600080fd5b50603f80601d6000396000f3fe"
        }"#,
    )?;
    Ok(path)
}

#[tokio::test]
async fn test_deploy_then_find() -> Result<()> {
    eprintln!("🧪 Testing deploy -> find-deployed flow...");

    let temp_dir = tempfile::tempdir()?;
    let artifact = ContractArtifact::load(write_artifact(&temp_dir)?)?;

    // nonce 0 was the cleanup self transfer, so the registry lands at nonce 1
    let chain = MockChain::new(DEPLOYER)
        .with_balance(DEPLOYER, ether_to_wei(1))
        .with_nonces(DEPLOYER, 1, 1);

    let report = deploy_contract(&chain, artifact.bytecode.clone(), None).await?;
    eprintln!("✅ Deployed at {}", report.contract_address);

    let found = find_deployed(&chain, DEPLOYER, NonceRange::default()).await?;
    assert_eq!(
        found.outcome,
        FinderOutcome::Found {
            nonce: 1,
            address: report.contract_address,
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_stuck_account_is_reconciled_at_confirmed_nonce() -> Result<()> {
    eprintln!("🧪 Testing stuck nonce remediation...");

    let chain = MockChain::new(DEPLOYER)
        .with_balance(DEPLOYER, ether_to_wei(2))
        .with_nonces(DEPLOYER, 0, 2);

    let status = fetch_status(&chain, DEPLOYER).await?;
    assert!(status.has_stuck_transactions());

    let report = reconcile_nonce(&chain, &GasConfig::default()).await?;

    let submitted = chain.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].nonce, status.confirmed_nonce());
    assert_eq!(submitted[0].to, Some(DEPLOYER));
    assert_eq!(submitted[0].value, U256::ZERO);
    assert!(report.outcome.success);
    Ok(())
}

#[tokio::test]
async fn test_self_transfer_never_creates_a_contract() -> Result<()> {
    let chain = MockChain::new(DEPLOYER).with_nonces(DEPLOYER, 0, 1);

    reconcile_nonce(&chain, &GasConfig::default()).await?;

    let found = find_deployed(&chain, DEPLOYER, NonceRange::new(0, 0)?).await?;
    assert_eq!(found.outcome, FinderOutcome::NotFound);
    assert_eq!(chain.code_lookups(), vec![DEPLOYER.create(0)]);
    Ok(())
}

#[tokio::test]
async fn test_deploy_bytecode_reaches_chain() -> Result<()> {
    let code = Bytes::from_static(&[0x60, 0x80]);
    let chain = MockChain::new(DEPLOYER);

    let report = deploy_contract(&chain, code.clone(), Some(50_000_000_000)).await?;

    let mut stored = Vec::new();
    for probe in find_deployed(&chain, DEPLOYER, NonceRange::new(0, 0)?).await?.probes {
        stored.push(probe.has_code);
    }
    assert_eq!(stored, vec![true]);
    assert_eq!(report.nonce, 0);
    Ok(())
}
