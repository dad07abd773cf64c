//! Low-level call helpers with explicit success propagation.
//!
//! Every outgoing call goes through the host so that revert data of the callee comes back
//! unchanged as the `Err` side.

use alloc::vec::Vec;

use alloy_sol_types::SolCall;
use stylus_sdk::{
    alloy_primitives::{Address, U256},
    call::Call,
    prelude::*,
};

use smart_account_types::Operation;

use crate::account::SmartAccount;

impl SmartAccount {
    /// Run `data` against `to` either as an independent call or in the account's storage
    /// context. A `gas` of zero forwards everything that is left.
    pub(crate) fn _execute(
        &mut self,
        to: Address,
        value: U256,
        data: &[u8],
        operation: Operation,
        gas: u64,
    ) -> Result<Vec<u8>, Vec<u8>> {
        match operation {
            Operation::Call => self._call(to, value, data, gas),
            Operation::DelegateCall => {
                let mut ctx = Call::new_mutating(self);
                if gas != 0 {
                    ctx = ctx.gas(gas);
                }
                unsafe { self.vm().delegate_call(&ctx, to, data) }.map_err(Vec::<u8>::from)
            }
        }
    }

    pub(crate) fn _call(&mut self, to: Address, value: U256, data: &[u8], gas: u64) -> Result<Vec<u8>, Vec<u8>> {
        let mut ctx = Call::new_payable(self, value);
        if gas != 0 {
            ctx = ctx.gas(gas);
        }
        self.vm().call(&ctx, to, data).map_err(Vec::<u8>::from)
    }

    /// ABI-encode `call`, send it to `to` and decode the returns; inner revert data is passed
    /// through unchanged and undecodable return data reverts with empty data.
    pub(crate) fn _call_contract<C: SolCall>(
        &mut self,
        to: Address,
        value: U256,
        call: &C,
    ) -> Result<C::Return, Vec<u8>> {
        let out = self._call(to, value, &call.abi_encode(), 0)?;
        C::abi_decode_returns(&out, true).map_err(|_| Vec::new())
    }

    pub(crate) fn _static_call_contract<C: SolCall>(&self, to: Address, call: &C) -> Result<C::Return, Vec<u8>> {
        let out = self.vm().static_call(&Call::new(), to, &call.abi_encode()).map_err(Vec::<u8>::from)?;
        C::abi_decode_returns(&out, true).map_err(|_| Vec::new())
    }
}

/// The address held in the low 20 bytes of the first return word (short data is zero-padded
/// on the right, as `mload` over fresh memory would see it).
pub fn address_from_return_data(data: &[u8]) -> Address {
    let mut word = [0u8; 32];
    let len = data.len().min(32);
    word[..len].copy_from_slice(&data[..len]);
    Address::from_slice(&word[12..32])
}
