//! Modular smart account for ERC-4337 (v0.6) entry points, as an Arbitrum Stylus program.
//!
//! The account is reached through a proxy that delegates every call here, so all state lives
//! in the proxy's storage. Execution is gated on the entry point; authorization is delegated to
//! enabled modules kept in the [`module_manager`] registry.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod account;
pub mod errors;
pub mod events;
pub mod module_manager;
pub mod utils;

#[cfg(test)]
mod tests;

pub use account::SmartAccount;
