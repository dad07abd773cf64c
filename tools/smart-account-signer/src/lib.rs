//! Off-chain helpers for account owners: calldata builders and user operation signing.

pub mod encoder;
pub mod signer;
pub mod types;


pub use encoder::*;
pub use signer::{signing_digest, OwnerSigner};
pub use types::{AccountCall, GasParams, HashConvention};
