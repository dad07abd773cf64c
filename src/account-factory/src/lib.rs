//! Factory for account proxies.
//!
//! Proxies are deployed with CREATE2 under a caller-chosen salt, so an account's address is
//! known (and can be funded) before it exists. The optional initialization call runs in the
//! same transaction as the deployment.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod errors;
pub mod events;
pub mod factory;


pub use factory::SmartAccountFactory;
