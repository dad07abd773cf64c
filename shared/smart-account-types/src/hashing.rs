//! Signing-hash conventions and counterfactual proxy addresses.

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::{sol_data, SolType};

/// `keccak256("\x19Ethereum Signed Message:\n32" || hash)`.
///
/// The prefixed convention produced by `personal_sign`-style signers.
pub fn eth_signed_message_hash(hash: B256) -> B256 {
    let mut buf = Vec::with_capacity(28 + 32);
    buf.extend_from_slice(b"\x19Ethereum Signed Message:\n32");
    buf.extend_from_slice(hash.as_slice());
    keccak256(buf)
}

/// CREATE2 salt for a factory salt: the number as a big-endian word.
pub fn salt_word(salt: U256) -> B256 {
    B256::from(salt.to_be_bytes::<32>())
}

/// Proxy init code: the proxy creation code followed by the ABI-encoded implementation.
pub fn proxy_init_code(creation_code: &[u8], implementation: Address) -> Vec<u8> {
    let mut code = creation_code.to_vec();
    code.extend_from_slice(&sol_data::Address::abi_encode(&implementation));
    code
}

/// Address `factory` deploys `init_code` to under `salt`.
pub fn counterfactual_address(factory: Address, salt: U256, init_code: &[u8]) -> Address {
    factory.create2_from_code(salt_word(salt), init_code)
}
