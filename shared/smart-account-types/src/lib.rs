//! Shared types for the modular smart account (on-chain/off-chain).

pub mod constants;
pub mod hashing;
pub mod interfaces;
pub mod operation;
pub mod user_op;

pub use constants::*;
pub use hashing::{counterfactual_address, eth_signed_message_hash, proxy_init_code, salt_word};
pub use interfaces::{
    IERC20, IEcdsaOwnershipModule, IEntryPoint, IModuleManager, ISmartAccount,
    ISmartAccountFactory, UserOperation,
};
pub use operation::Operation;
pub use user_op::{
    decode_module_signature, encode_module_signature, pack_user_op, required_prefund,
    user_op_hash,
};
