//! ECDSA ownership module for the modular smart account, as an Arbitrum Stylus program.
//!
//! One deployment serves every account: the owner table is keyed by the calling account, and
//! signatures are checked through the `ecrecover` precompile under both signing-hash
//! conventions.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod errors;
pub mod events;
pub mod ownership_module;
pub mod utils;


pub use ownership_module::EcdsaOwnershipModule;
