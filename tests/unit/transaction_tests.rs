use alloy::primitives::{Address, Bytes, U256, address};
use registry_ops::GasConfig;
use registry_ops::TxRequest;
use registry_ops::gas::gwei;
use registry_ops::nonce::replacement_transaction;

const ALICE: Address = address!("0x00000000000000000000000000000000000a11ce");

#[test]
fn test_replacement_transaction_shape() {
    let tx = replacement_transaction(ALICE, 0, &GasConfig::default());

    // Test basic fields
    assert_eq!(tx.to, Some(ALICE));
    assert_eq!(tx.value, U256::ZERO);
    assert_eq!(tx.nonce, 0);
    assert!(tx.input.is_empty());

    // Test gas fields
    assert_eq!(tx.gas_limit, Some(21_000));
    assert_eq!(tx.gas_price, Some(200_000_000_000));

    eprintln!("✅ Replacement transaction built: {:?}", tx);
}

#[test]
fn test_replacement_outbids_network_baseline() {
    let gas = GasConfig::default();
    let tx = replacement_transaction(ALICE, 12, &gas);

    // well above the hardcoded deploy prices on mumbai (20) and polygon (50)
    assert!(tx.gas_price.unwrap() > gwei(50));
    assert_eq!(tx.nonce, 12);
}

#[test]
fn test_replacement_cost_matches_gas_fields() {
    let tx = replacement_transaction(ALICE, 1, &GasConfig::default());
    assert_eq!(
        tx.max_transaction_cost(),
        Some(U256::from(21_000u64) * U256::from(gwei(200)))
    );
}

#[test]
fn test_creation_request() {
    let code = Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52]);
    let tx = TxRequest::create(code.clone(), 2).with_gas_price(gwei(20));

    assert!(tx.is_create());
    assert_eq!(tx.input, code);
    assert_eq!(tx.value, U256::ZERO);
    assert_eq!(tx.gas_limit, None); // left to the node's estimate
    assert_eq!(tx.max_transaction_cost(), None);
}

#[test]
fn test_large_value_transfer_cost() {
    let large_amount = U256::from(1_000_000_000u64) * U256::from(10u64).pow(U256::from(18));
    let tx = TxRequest::transfer(ALICE, large_amount, 0)
        .with_gas_limit(21_000)
        .with_gas_price(gwei(30));

    assert_eq!(
        tx.max_transaction_cost(),
        Some(large_amount + U256::from(21_000u64) * U256::from(gwei(30)))
    );
}
