use alloy::primitives::{Address, address};
use proptest::prelude::*;
use registry_ops::{NonceRange, contract_address};

#[test]
fn test_derivation_matches_alloy_create() {
    let sender = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    for nonce in NonceRange::default().iter() {
        assert_eq!(contract_address(sender, nonce), sender.create(nonce));
    }
}

#[test]
fn test_different_senders_differ() {
    let a = address!("0x0000000000000000000000000000000000000001");
    let b = address!("0x0000000000000000000000000000000000000002");
    assert_ne!(contract_address(a, 1), contract_address(b, 1));
}

proptest! {
    #[test]
    fn test_recomputing_gives_same_address(bytes in any::<[u8; 20]>(), nonce in 1u64..=5) {
        let sender = Address::from(bytes);
        let first = contract_address(sender, nonce);
        let second = contract_address(sender, nonce);
        prop_assert_eq!(first, second);
        prop_assert_ne!(first, sender);
    }
}
