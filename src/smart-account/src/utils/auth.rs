//! Caller capability checks.
//!
//! Authorization compares the frame's logical caller against the identities an account trusts,
//! instead of scattering raw address comparisons through the contract.

use stylus_sdk::{alloy_primitives::Address, prelude::*};

use smart_account_types::{ENTRY_POINT_ADDRESS, SENTINEL_MODULES};

use crate::{
    account::SmartAccount,
    errors::{
        AccountError, AccountNotInitialized, CallerIsNotEntryPoint, CallerIsNotEntryPointOrSelf, DelegateCallsOnly,
    },
};

/// The identity the current caller holds with respect to an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// The trusted dispatcher.
    EntryPoint,
    /// The account calling itself.
    SelfCall,
    /// Anyone else (including modules; module status is checked against the registry).
    External,
}

impl Capability {
    pub fn of(caller: Address, account: Address) -> Self {
        if caller == ENTRY_POINT_ADDRESS {
            Capability::EntryPoint
        } else if caller == account {
            Capability::SelfCall
        } else {
            Capability::External
        }
    }
}

/// How the running code was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Called at the implementation's own address.
    Direct,
    /// Running in a proxy's storage context.
    Delegated,
}

impl Invocation {
    /// `implementation_self` is only ever written in the implementation's own storage, so it
    /// matches the executing address exactly when nothing is delegating to us.
    pub fn of(implementation_self: Address, executing: Address) -> Self {
        if implementation_self == executing {
            Invocation::Direct
        } else {
            Invocation::Delegated
        }
    }
}

/// Neither the zero address nor the registry sentinel.
pub fn is_valid_module_address(module: Address) -> bool {
    module != Address::ZERO && module != SENTINEL_MODULES
}

impl SmartAccount {
    pub(crate) fn _capability(&self) -> Capability {
        Capability::of(self.vm().msg_sender(), self.vm().contract_address())
    }

    pub(crate) fn _require_entry_point(&self) -> Result<(), AccountError> {
        match self._capability() {
            Capability::EntryPoint => Ok(()),
            _ => Err(CallerIsNotEntryPoint { caller: self.vm().msg_sender() }.into()),
        }
    }

    pub(crate) fn _require_entry_point_or_self(&self) -> Result<(), AccountError> {
        match self._capability() {
            Capability::EntryPoint | Capability::SelfCall => Ok(()),
            Capability::External => Err(CallerIsNotEntryPointOrSelf { caller: self.vm().msg_sender() }.into()),
        }
    }

    pub(crate) fn _require_delegated(&self) -> Result<(), AccountError> {
        match Invocation::of(self.implementation_self.get(), self.vm().contract_address()) {
            Invocation::Delegated => Ok(()),
            Invocation::Direct => Err(DelegateCallsOnly {}.into()),
        }
    }

    pub(crate) fn _require_initialized(&self) -> Result<(), AccountError> {
        if self.initialized.get() {
            Ok(())
        } else {
            Err(AccountNotInitialized { smartAccount: self.vm().contract_address() }.into())
        }
    }

    // Registry changes come from the entry point or from the account itself.
    pub(crate) fn _require_manager(&self) -> Result<(), AccountError> {
        self._require_entry_point_or_self()?;
        self._require_initialized()
    }
}
