use alloy::primitives::Address;

// CREATE address: keccak256(rlp([sender, nonce]))[12..]
pub fn contract_address(sender: Address, nonce: u64) -> Address {
    sender.create(nonce)
}
