//! The smart account implementation, reached through an account proxy.
//!
//! Everything stateful (the initialized flag and the module registry) lives in the proxy's
//! storage. The entry point is a build-time constant, the same for every proxy sharing this
//! implementation.
//!
//! The account does no signature checking of its own: authorization of user operations is the
//! job of an enabled module, and the account trusts whatever the entry point decides to execute.
//! Calls are not guarded against re-entrancy; an enabled module may call back into the account
//! while one of its own executions is in flight.

use alloc::{string::String, vec::Vec};

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{aliases::U192, Address, FixedBytes, U256},
    prelude::*,
};

use smart_account_types::{IEntryPoint, ACCOUNT_VERSION, ENTRY_POINT_ADDRESS, VALIDATION_SUCCESS};

use crate::{
    errors::{AccountError, AlreadyInitialized, WrongBatchProvided},
    events::SmartAccountReceivedNativeToken,
};

/// `UserOperation` as it crosses the ABI: (sender, nonce, initCode, callData, callGasLimit,
/// verificationGasLimit, preVerificationGas, maxFeePerGas, maxPriorityFeePerGas,
/// paymasterAndData, signature).
pub type UserOperationTuple = (Address, U256, Bytes, Bytes, U256, U256, U256, U256, U256, Bytes, Bytes);

sol_storage! {
    #[entrypoint]
    pub struct SmartAccount {
        /// Module registry, see [`crate::module_manager`].
        mapping(address => address) modules;
        bool initialized;
        /// Written once by the constructor, in the implementation's own storage only.
        address implementation_self;
    }
}

#[public]
impl SmartAccount {
    #[constructor]
    pub fn constructor(&mut self) {
        let this = self.vm().contract_address();
        self.implementation_self.set(this);
    }

    /// One-shot setup of the proxy's storage: marks the account initialized and enables the
    /// module returned by `setup_contract`.
    pub fn init(&mut self, setup_contract: Address, setup_data: Bytes) -> Result<Address, Vec<u8>> {
        self._require_delegated()?;
        if self.initialized.get() {
            return Err(AccountError::from(AlreadyInitialized { smartAccount: self.vm().contract_address() }).into());
        }
        self.initialized.set(true);

        self._setup_and_enable_module(setup_contract, &setup_data)
    }

    pub fn execute(&mut self, dest: Address, value: U256, func: Bytes) -> Result<(), Vec<u8>> {
        self._require_entry_point()?;
        self._require_initialized()?;
        self._call(dest, value, &func, 0)?;
        Ok(())
    }

    /// All-or-nothing: the first failing call reverts the whole batch with its revert data.
    pub fn execute_batch(&mut self, dest: Vec<Address>, value: Vec<U256>, func: Vec<Bytes>) -> Result<(), Vec<u8>> {
        self._require_entry_point()?;
        self._require_initialized()?;
        if dest.is_empty() || dest.len() != value.len() || value.len() != func.len() {
            return Err(AccountError::from(WrongBatchProvided {
                destLength: U256::from(dest.len()),
                valueLength: U256::from(value.len()),
                funcLength: U256::from(func.len()),
            })
            .into());
        }
        for ((dest, value), func) in dest.into_iter().zip(value).zip(func) {
            self._call(dest, value, &func, 0)?;
        }
        Ok(())
    }

    /// Pays the entry point what it asked for and reports success. The transfer result is
    /// ignored; the entry point verifies the deposit itself.
    pub fn validate_user_op(
        &mut self,
        _user_op: UserOperationTuple,
        _user_op_hash: FixedBytes<32>,
        missing_account_funds: U256,
    ) -> Result<U256, AccountError> {
        self._require_entry_point()?;
        self._require_initialized()?;
        if !missing_account_funds.is_zero() {
            let entry_point = self.vm().msg_sender();
            let _ = self._call(entry_point, missing_account_funds, &[], 0);
        }
        Ok(VALIDATION_SUCCESS)
    }

    #[payable]
    pub fn add_deposit(&mut self) -> Result<(), Vec<u8>> {
        self._require_initialized()?;
        let call = IEntryPoint::depositToCall { account: self.vm().contract_address() };
        let value = self.vm().msg_value();
        self._call_contract(ENTRY_POINT_ADDRESS, value, &call)?;
        Ok(())
    }

    pub fn get_deposit(&self) -> Result<U256, Vec<u8>> {
        let call = IEntryPoint::balanceOfCall { account: self.vm().contract_address() };
        Ok(self._static_call_contract(ENTRY_POINT_ADDRESS, &call)?._0)
    }

    pub fn withdraw_deposit_to(&mut self, withdraw_address: Address, amount: U256) -> Result<(), Vec<u8>> {
        self._require_entry_point_or_self()?;
        self._require_initialized()?;
        let call = IEntryPoint::withdrawToCall { withdrawAddress: withdraw_address, withdrawAmount: amount };
        self._call_contract(ENTRY_POINT_ADDRESS, U256::ZERO, &call)?;
        Ok(())
    }

    /// Entry point nonce of this account under `key`.
    pub fn nonce(&self, key: U192) -> Result<U256, Vec<u8>> {
        let call = IEntryPoint::getNonceCall { sender: self.vm().contract_address(), key };
        Ok(self._static_call_contract(ENTRY_POINT_ADDRESS, &call)?.nonce)
    }

    pub fn entry_point(&self) -> Address {
        ENTRY_POINT_ADDRESS
    }

    pub fn version(&self) -> String {
        ACCOUNT_VERSION.into()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    pub fn enable_module(&mut self, module: Address) -> Result<(), AccountError> {
        self._require_manager()?;
        self._enable_module(module)
    }

    pub fn disable_module(&mut self, prev_module: Address, module: Address) -> Result<(), AccountError> {
        self._require_manager()?;
        self._disable_module(prev_module, module)
    }

    pub fn setup_and_enable_module(&mut self, setup_contract: Address, setup_data: Bytes) -> Result<Address, Vec<u8>> {
        self._require_manager()?;
        self._setup_and_enable_module(setup_contract, &setup_data)
    }

    pub fn is_module_enabled(&self, module: Address) -> bool {
        self._is_module_enabled(module)
    }

    pub fn get_modules_paginated(&self, start: Address, page_size: U256) -> Result<(Vec<Address>, Address), AccountError> {
        self._modules_paginated(start, page_size)
    }

    /// Execute on behalf of the calling module. Failure of the inner call is reported through
    /// the return value and events, never as a revert.
    pub fn exec_transaction_from_module(
        &mut self,
        to: Address,
        value: U256,
        data: Bytes,
        operation: u8,
        tx_gas: U256,
    ) -> Result<bool, AccountError> {
        let module = self._require_enabled_module()?;
        let operation = Self::_operation(operation)?;
        let (success, _) = self._exec_and_report(module, to, value, &data, operation, tx_gas);
        Ok(success)
    }

    /// Like `execTransactionFromModule`, also handing back the inner call's return or revert data.
    pub fn exec_transaction_from_module_return_data(
        &mut self,
        to: Address,
        value: U256,
        data: Bytes,
        operation: u8,
    ) -> Result<(bool, Bytes), AccountError> {
        let module = self._require_enabled_module()?;
        let operation = Self::_operation(operation)?;
        let (success, out) = self._exec_and_report(module, to, value, &data, operation, U256::ZERO);
        Ok((success, out.into()))
    }

    pub fn exec_batch_transaction_from_module(
        &mut self,
        to: Vec<Address>,
        value: Vec<U256>,
        data: Vec<Bytes>,
        operations: Vec<u8>,
    ) -> Result<bool, AccountError> {
        self._exec_batch_from_module(&to, &value, &data, &operations)
    }

    /// Plain value transfers to the proxy.
    #[receive]
    #[payable]
    pub fn receive(&mut self) -> Result<(), Vec<u8>> {
        self._require_delegated()?;
        let event = SmartAccountReceivedNativeToken { sender: self.vm().msg_sender(), value: self.vm().msg_value() };
        stylus_sdk::stylus_core::log(self.vm(), event);
        Ok(())
    }
}
