//! Two-dimensional nonces: a 192-bit key selects an independent 64-bit sequence.

use stylus_sdk::alloy_primitives::{aliases::U192, U256};

/// `key << 64 | sequence`
pub fn compose_nonce(key: U192, sequence: u64) -> U256 {
    (U256::from_be_slice(&key.to_be_bytes::<24>()) << 64) | U256::from(sequence)
}

/// Split a full nonce into its key and sequence.
pub fn split_nonce(nonce: U256) -> (U192, u64) {
    let key = U192::from_be_slice(&(nonce >> 64usize).to_be_bytes::<32>()[8..32]);
    let sequence = (nonce & U256::from(u64::MAX)).to::<u64>();
    (key, sequence)
}
