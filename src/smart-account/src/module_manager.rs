//! Module registry and module-initiated execution.
//!
//! Enabled modules form a singly linked list threaded through the account's
//! `mapping(address => address) modules`. The sentinel address anchors the list: it points at
//! the most recently enabled module, the last module points back at the sentinel, and a module
//! is enabled iff its entry is non-zero. A never-initialized registry has a zero sentinel entry,
//! which reads as the empty list.
//!
//! The public wrappers live on the account's `#[public]` impl; caller authorization for the
//! management operations belongs to them.

use alloc::vec::Vec;

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{keccak256, Address, U256},
    prelude::*,
};

use smart_account_types::{Operation, SENTINEL_MODULES};

use crate::{
    account::SmartAccount,
    errors::{
        AccountError, ModuleAlreadyEnabled, ModuleAndPrevModuleMismatch, ModuleCannotBeZeroOrSentinel,
        ModuleNotEnabled, UnknownOperation, WrongModuleBatchProvided, WrongModuleSetupAddress,
        WrongPaginationPageSize,
    },
    events::{
        DisabledModule, EnabledModule, ExecutionFailure, ExecutionFromModuleFailure, ExecutionFromModuleSuccess,
        ExecutionSuccess,
    },
    utils::{auth::is_valid_module_address, calls::address_from_return_data},
};

impl SmartAccount {
    pub(crate) fn _is_module_enabled(&self, module: Address) -> bool {
        module != SENTINEL_MODULES && self.modules.get(module) != Address::ZERO
    }

    /// Insert `module` at the head of the list.
    pub(crate) fn _enable_module(&mut self, module: Address) -> Result<(), AccountError> {
        if !is_valid_module_address(module) {
            return Err(ModuleCannotBeZeroOrSentinel { module }.into());
        }
        if self.modules.get(module) != Address::ZERO {
            return Err(ModuleAlreadyEnabled { module }.into());
        }

        let mut head = self.modules.get(SENTINEL_MODULES);
        if head == Address::ZERO {
            head = SENTINEL_MODULES;
        }
        self.modules.insert(module, head);
        self.modules.insert(SENTINEL_MODULES, module);

        stylus_sdk::stylus_core::log(self.vm(), EnabledModule { module });
        Ok(())
    }

    /// Unlink `module`, which must directly follow `prev_module`.
    pub(crate) fn _disable_module(&mut self, prev_module: Address, module: Address) -> Result<(), AccountError> {
        if !is_valid_module_address(module) {
            return Err(ModuleCannotBeZeroOrSentinel { module }.into());
        }
        let returned = self.modules.get(prev_module);
        if returned != module {
            return Err(ModuleAndPrevModuleMismatch {
                expectedModule: module,
                returnedModule: returned,
                prevModule: prev_module,
            }
            .into());
        }

        let next = self.modules.get(module);
        self.modules.insert(prev_module, next);
        self.modules.insert(module, Address::ZERO);

        stylus_sdk::stylus_core::log(self.vm(), DisabledModule { module });
        Ok(())
    }

    /// Call `setup_contract` with `setup_data` and read the module address from the first word
    /// of its return data. Reverts of the setup call are propagated unchanged.
    pub(crate) fn _setup_module(&mut self, setup_contract: Address, setup_data: &[u8]) -> Result<Address, Vec<u8>> {
        if setup_contract == Address::ZERO {
            return Err(AccountError::from(WrongModuleSetupAddress { setupContract: setup_contract }).into());
        }
        let out = self._call(setup_contract, U256::ZERO, setup_data, 0)?;
        Ok(address_from_return_data(&out))
    }

    pub(crate) fn _setup_and_enable_module(
        &mut self,
        setup_contract: Address,
        setup_data: &[u8],
    ) -> Result<Address, Vec<u8>> {
        let module = self._setup_module(setup_contract, setup_data)?;
        self._enable_module(module)?;
        Ok(module)
    }

    /// Up to `page_size` modules following `start` (the sentinel or an enabled module), plus the
    /// cursor for the next page: the last module returned when more remain, otherwise the
    /// sentinel.
    pub(crate) fn _modules_paginated(
        &self,
        start: Address,
        page_size: U256,
    ) -> Result<(Vec<Address>, Address), AccountError> {
        if start != SENTINEL_MODULES && !self._is_module_enabled(start) {
            return Err(ModuleNotEnabled { module: start }.into());
        }
        if page_size.is_zero() {
            return Err(WrongPaginationPageSize { pageSize: page_size }.into());
        }
        let limit = if page_size > U256::from(u64::MAX) { u64::MAX } else { page_size.to::<u64>() };

        let mut page = Vec::new();
        let mut next = self.modules.get(start);
        while next != Address::ZERO && next != SENTINEL_MODULES && (page.len() as u64) < limit {
            page.push(next);
            next = self.modules.get(next);
        }

        let cursor = match page.last() {
            Some(last) if next != Address::ZERO && next != SENTINEL_MODULES => *last,
            _ => SENTINEL_MODULES,
        };
        Ok((page, cursor))
    }

    /// Runs every entry regardless of earlier failures and reports whether all succeeded.
    /// Effects of successful entries persist even when another entry fails.
    pub(crate) fn _exec_batch_from_module(
        &mut self,
        to: &[Address],
        value: &[U256],
        data: &[Bytes],
        operations: &[u8],
    ) -> Result<bool, AccountError> {
        let module = self._require_enabled_module()?;
        if to.is_empty() || to.len() != value.len() || value.len() != data.len() || data.len() != operations.len()
        {
            return Err(WrongModuleBatchProvided {
                toLength: U256::from(to.len()),
                valueLength: U256::from(value.len()),
                dataLength: U256::from(data.len()),
                operationsLength: U256::from(operations.len()),
            }
            .into());
        }
        let operations = operations.iter().map(|op| Self::_operation(*op)).collect::<Result<Vec<_>, _>>()?;

        let mut success = true;
        for (i, operation) in operations.into_iter().enumerate() {
            let (ok, _) = self._exec_and_report(module, to[i], value[i], &data[i], operation, U256::ZERO);
            success &= ok;
        }
        Ok(success)
    }

    /// The calling module, which must be enabled.
    pub(crate) fn _require_enabled_module(&self) -> Result<Address, AccountError> {
        let module = self.vm().msg_sender();
        if !self._is_module_enabled(module) {
            return Err(ModuleNotEnabled { module }.into());
        }
        Ok(module)
    }

    pub(crate) fn _operation(operation: u8) -> Result<Operation, AccountError> {
        Operation::try_from(operation).map_err(|operation| UnknownOperation { operation }.into())
    }

    /// Execute on behalf of `module`. Failure of the inner call is reported through the
    /// returned flag and events, never as a revert.
    pub(crate) fn _exec_and_report(
        &mut self,
        module: Address,
        to: Address,
        value: U256,
        data: &[u8],
        operation: Operation,
        tx_gas: U256,
    ) -> (bool, Vec<u8>) {
        let gas = if tx_gas > U256::from(u64::MAX) { u64::MAX } else { tx_gas.to::<u64>() };
        let result = self._execute(to, value, data, operation, gas);
        let data_hash = keccak256(data);
        let op = u8::from(operation);

        match result {
            Ok(out) => {
                stylus_sdk::stylus_core::log(self.vm(), ExecutionSuccess { to, value, data: data_hash, operation: op, txGas: tx_gas });
                stylus_sdk::stylus_core::log(self.vm(), ExecutionFromModuleSuccess { module });
                (true, out)
            }
            Err(out) => {
                stylus_sdk::stylus_core::log(self.vm(), ExecutionFailure { to, value, data: data_hash, operation: op, txGas: tx_gas });
                stylus_sdk::stylus_core::log(self.vm(), ExecutionFromModuleFailure { module });
                (false, out)
            }
        }
    }
}
