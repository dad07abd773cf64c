//! Shared utilities for the account contract.

pub mod auth;
pub mod calls;
