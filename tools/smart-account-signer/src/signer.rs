use alloy_primitives::{Address, FixedBytes};
use k256::ecdsa::{SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};
use smart_account_types::{encode_module_signature, user_op_hash, UserOperation};

use crate::types::HashConvention;

fn keccak256_bytes(bytes: &[u8]) -> FixedBytes<32> {
    let mut h = Keccak256::new();
    h.update(bytes);
    let out = h.finalize();
    let mut b = [0u8; 32];
    b.copy_from_slice(out.as_slice());
    FixedBytes(b)
}

/// The digest an owner signs for `hash` under `convention`.
pub fn signing_digest(hash: FixedBytes<32>, convention: HashConvention) -> FixedBytes<32> {
    match convention {
        HashConvention::Raw => hash,
        HashConvention::EthSignedMessage => {
            let mut buf = Vec::with_capacity(28 + 32);
            buf.extend_from_slice(b"\x19Ethereum Signed Message:\n32");
            buf.extend_from_slice(hash.as_slice());
            keccak256_bytes(&buf)
        }
    }
}

/// Holds an account owner's secp256k1 key.
pub struct OwnerSigner {
    key: SigningKey,
}

impl OwnerSigner {
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }

    pub fn from_bytes(secret: &[u8; 32]) -> Result<Self, k256::ecdsa::Error> {
        Ok(Self::new(SigningKey::from_slice(secret)?))
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        self.key.verifying_key()
    }

    /// Ethereum address of the key: low 20 bytes of keccak256 over the uncompressed point.
    pub fn address(&self) -> Address {
        let point = self.key.verifying_key().to_encoded_point(false);
        let hash = keccak256_bytes(&point.as_bytes()[1..]);
        Address::from_slice(&hash[12..])
    }

    /// 65-byte `r || s || v` signature over `hash`, with `v` in {27, 28}.
    pub fn sign_hash(&self, hash: FixedBytes<32>, convention: HashConvention) -> Result<Vec<u8>, k256::ecdsa::Error> {
        let digest = signing_digest(hash, convention);
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest.as_slice())?;

        let mut sig_bytes = Vec::with_capacity(65);
        sig_bytes.extend_from_slice(&signature.to_bytes());
        sig_bytes.push(27 + recovery_id.to_byte());
        Ok(sig_bytes)
    }

    /// Sign `op` for `entry_point` on `chain_id` and store the module signature payload in
    /// `op.signature`. Returns the user operation hash.
    pub fn sign_user_op(
        &self,
        op: &mut UserOperation,
        entry_point: Address,
        chain_id: u64,
        module: Address,
        convention: HashConvention,
    ) -> Result<FixedBytes<32>, k256::ecdsa::Error> {
        let hash = user_op_hash(op, entry_point, chain_id);
        let signature = self.sign_hash(hash, convention)?;
        op.signature = encode_module_signature(&signature, module).into();
        Ok(hash)
    }
}
