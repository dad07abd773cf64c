//! Signature recovery through the `ecrecover` precompile.
//!
//! A signature is accepted under either signing-hash convention, see [`SigningConvention`].

use stylus_sdk::{
    alloy_primitives::{address, Address, B256},
    call::Call,
    prelude::*,
};

use smart_account_types::{eth_signed_message_hash, MIN_SIGNATURE_LENGTH};

use crate::ownership_module::EcdsaOwnershipModule;

/// EVM `ecrecover` precompile.
pub const ECRECOVER: Address = address!("0000000000000000000000000000000000000001");

const ECRECOVER_GAS: u64 = 50_000;

/// How the signed digest relates to the hash being authorized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigningConvention {
    /// `personal_sign`: the owner signed the EIP-191 prefixed hash.
    EthSignedMessage,
    /// The owner signed the hash itself.
    Raw,
}

impl SigningConvention {
    /// Tried in this order.
    pub const ALL: [SigningConvention; 2] = [SigningConvention::EthSignedMessage, SigningConvention::Raw];

    pub fn digest(self, hash: B256) -> B256 {
        match self {
            SigningConvention::EthSignedMessage => eth_signed_message_hash(hash),
            SigningConvention::Raw => hash,
        }
    }
}

/// Precompile input `digest || v || r || s` for a 65-byte `r || s || v` signature.
///
/// `v` may be given as 0/1 or 27/28; anything else (or any other length) is not recoverable.
pub fn ecrecover_input(digest: B256, signature: &[u8]) -> Option<[u8; 128]> {
    if signature.len() != MIN_SIGNATURE_LENGTH {
        return None;
    }
    let v = match signature[64] {
        v @ (27 | 28) => v,
        v @ (0 | 1) => v + 27,
        _ => return None,
    };

    let mut input = [0u8; 128];
    input[0..32].copy_from_slice(digest.as_slice());
    input[63] = v;
    input[64..128].copy_from_slice(&signature[..64]);
    Some(input)
}

impl EcdsaOwnershipModule {
    /// Signer of `signature` over `hash` under `convention`, if it recovers.
    pub(crate) fn _recover(&self, convention: SigningConvention, hash: B256, signature: &[u8]) -> Option<Address> {
        let input = ecrecover_input(convention.digest(hash), signature)?;
        let ctx = Call::new().gas(ECRECOVER_GAS);
        let out = self.vm().static_call(&ctx, ECRECOVER, &input).ok()?;
        if out.len() < 32 {
            return None;
        }
        // 32-byte word with the address in the low 20 bytes.
        let recovered = Address::from_slice(&out[12..32]);
        (recovered != Address::ZERO).then_some(recovered)
    }
}
