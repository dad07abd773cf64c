//! The implementation address lives at the storage slot numbered by the proxy's own address,
//! away from the sequential slots the account implementation lays out.

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    call::Call,
    prelude::*,
    ArbResult,
};

use crate::errors::{InvalidImplementation, ProxyError};

#[storage]
#[entrypoint]
pub struct AccountProxy {}

/// Slot holding the implementation of the proxy deployed at `proxy`.
pub fn implementation_slot(proxy: Address) -> U256 {
    U256::from_be_slice(proxy.as_slice())
}

#[public]
impl AccountProxy {
    #[constructor]
    pub fn constructor(&mut self, implementation: Address) -> Result<(), ProxyError> {
        if implementation == Address::ZERO {
            return Err(InvalidImplementation { implementation }.into());
        }
        let slot = implementation_slot(self.vm().contract_address());
        unsafe { self.vm().storage_cache_bytes32(slot, implementation.into_word()) };
        self.vm().flush_cache(false);
        Ok(())
    }

    /// Return data and revert data of the implementation come back byte for byte.
    #[fallback]
    #[payable]
    pub fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        self._delegate(calldata)
    }

    #[receive]
    #[payable]
    pub fn receive(&mut self) -> Result<(), Vec<u8>> {
        self._delegate(&[])?;
        Ok(())
    }
}

impl AccountProxy {
    pub fn implementation(&self) -> Address {
        let slot = implementation_slot(self.vm().contract_address());
        Address::from_word(self.vm().storage_load_bytes32(slot))
    }

    fn _delegate(&mut self, calldata: &[u8]) -> ArbResult {
        let implementation = self.implementation();
        let ctx = Call::new_mutating(self);
        unsafe { self.vm().delegate_call(&ctx, implementation, calldata) }.map_err(Vec::<u8>::from)
    }
}
