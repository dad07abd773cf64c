//! Per-account proxy. Holds the account's storage and balance and delegates everything to the
//! shared smart account implementation.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod errors;
pub mod proxy;


pub use proxy::AccountProxy;
