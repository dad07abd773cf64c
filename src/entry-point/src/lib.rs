//! Reference ERC-4337 (v0.6) entry point: deposits, two-dimensional nonces and `handleOps`.
//!
//! Gas is not metered per operation, so every operation is charged its full required prefund
//! (`(callGasLimit + verificationGasLimit + preVerificationGas) * maxFeePerGas`), paid to the
//! beneficiary at the end of the bundle. Paymasters are not supported.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod entry_point;
pub mod errors;
pub mod events;
pub mod nonce;


pub use entry_point::EntryPoint;
