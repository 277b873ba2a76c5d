use alloy::primitives::{Address, Bytes, address};
use anyhow::Result;
use registry_ops::{FinderOutcome, MockChain, NonceRange, contract_address, find_deployed};

const SENDER: Address = address!("0xABC0000000000000000000000000000000000ABC");

fn registry_code() -> Bytes {
    Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52, 0x34, 0x80, 0x15])
}

#[tokio::test]
async fn test_nonce_three_found_after_three_lookups() -> Result<()> {
    eprintln!("🧪 Nonces 1-2 empty, contract at nonce 3...");

    let chain = MockChain::new(SENDER).with_code(contract_address(SENDER, 3), registry_code());

    let report = find_deployed(&chain, SENDER, NonceRange::default()).await?;

    assert_eq!(
        report.outcome,
        FinderOutcome::Found {
            nonce: 3,
            address: contract_address(SENDER, 3),
        }
    );
    assert_eq!(chain.code_lookups().len(), 3);
    assert_eq!(report.probes.len(), 3);
    assert!(!report.probes[0].has_code);
    assert!(!report.probes[1].has_code);
    assert!(report.probes[2].has_code);
    Ok(())
}

#[tokio::test]
async fn test_lowest_nonce_wins_over_latest() -> Result<()> {
    let chain = MockChain::new(SENDER)
        .with_code(contract_address(SENDER, 2), registry_code())
        .with_code(contract_address(SENDER, 4), registry_code());

    let report = find_deployed(&chain, SENDER, NonceRange::default()).await?;

    assert_eq!(report.found_address(), Some(contract_address(SENDER, 2)));
    assert_eq!(chain.code_lookups().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_empty_range_reports_not_found() -> Result<()> {
    // code at nonce 0 is outside the default range
    let chain = MockChain::new(SENDER).with_code(contract_address(SENDER, 0), registry_code());

    let report = find_deployed(&chain, SENDER, NonceRange::default()).await?;

    assert_eq!(report.outcome, FinderOutcome::NotFound);
    assert_eq!(
        chain.code_lookups(),
        (1..=5).map(|n| contract_address(SENDER, n)).collect::<Vec<_>>()
    );
    Ok(())
}
