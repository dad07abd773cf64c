//! Protocol constants shared by the contracts and off-chain tooling.

use alloy_primitives::{address, Address, FixedBytes, U256};

/// The ERC-4337 v0.6 entry point the account trusts. Build-time constant, so it holds for every
/// proxy sharing the implementation.
pub const ENTRY_POINT_ADDRESS: Address = address!("5FF137D4b0FDCD49DcA30c7CF57E578a026d2789");

/// Head/tail marker of the module registry. Never a real module.
pub const SENTINEL_MODULES: Address = address!("0000000000000000000000000000000000000001");

// ERC-4337 validation data (a non-zero value is treated as failure by the entry point).
pub const VALIDATION_SUCCESS: U256 = U256::ZERO;
pub const SIG_VALIDATION_FAILED: U256 = U256::from_limbs([1, 0, 0, 0]);

// ERC-1271 responses.
pub const EIP1271_MAGIC_VALUE: FixedBytes<4> = FixedBytes([0x16, 0x26, 0xba, 0x7e]);
pub const EIP1271_INVALID_VALUE: FixedBytes<4> = FixedBytes([0xff, 0xff, 0xff, 0xff]);

/// `r || s || v`
pub const MIN_SIGNATURE_LENGTH: usize = 65;

pub const ACCOUNT_VERSION: &str = "1";
pub const ECDSA_MODULE_NAME: &str = "ECDSA Ownership Module";
pub const ECDSA_MODULE_VERSION: &str = "1";
