//! User operation hashing and the module signature payload.

use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_sol_types::{sol_data, SolType};

use crate::interfaces::UserOperation;

/// `abi.encode(bytes signature, address module)` carried in `UserOperation.signature`.
type ModuleSignaturePayload = (sol_data::Bytes, sol_data::Address);

/// v0.6 packing: every field except the signature, with dynamic fields replaced by their hashes.
type PackedUserOp = (
    sol_data::Address,
    sol_data::Uint<256>,
    sol_data::FixedBytes<32>,
    sol_data::FixedBytes<32>,
    sol_data::Uint<256>,
    sol_data::Uint<256>,
    sol_data::Uint<256>,
    sol_data::Uint<256>,
    sol_data::Uint<256>,
    sol_data::FixedBytes<32>,
);

/// `(keccak256(pack(op)), entryPoint, chainId)`
type UserOpHashInput = (sol_data::FixedBytes<32>, sol_data::Address, sol_data::Uint<256>);

/// ABI packing hashed by the entry point (v0.6).
pub fn pack_user_op(op: &UserOperation) -> Vec<u8> {
    PackedUserOp::abi_encode_params(&(
        op.sender,
        op.nonce,
        keccak256(&op.initCode),
        keccak256(&op.callData),
        op.callGasLimit,
        op.verificationGasLimit,
        op.preVerificationGas,
        op.maxFeePerGas,
        op.maxPriorityFeePerGas,
        keccak256(&op.paymasterAndData),
    ))
}

/// `keccak256(abi.encode(keccak256(pack(op)), entryPoint, chainId))`.
pub fn user_op_hash(op: &UserOperation, entry_point: Address, chain_id: u64) -> B256 {
    let inner = keccak256(pack_user_op(op));
    keccak256(UserOpHashInput::abi_encode_params(&(inner, entry_point, U256::from(chain_id))))
}

/// Wrap a raw ECDSA signature with the module expected to validate it.
pub fn encode_module_signature(signature: &[u8], module: Address) -> Vec<u8> {
    ModuleSignaturePayload::abi_encode_params(&(Bytes::copy_from_slice(signature), module))
}

/// Split `UserOperation.signature` into `(signature, module)`.
pub fn decode_module_signature(payload: &[u8]) -> Result<(Bytes, Address), alloy_sol_types::Error> {
    ModuleSignaturePayload::abi_decode_params(payload, true)
}

/// Total gas the entry point requires the account to prefund for `op`.
pub fn required_prefund(op: &UserOperation) -> U256 {
    let gas = op
        .callGasLimit
        .saturating_add(op.verificationGasLimit)
        .saturating_add(op.preVerificationGas);
    gas.saturating_mul(op.maxFeePerGas)
}
