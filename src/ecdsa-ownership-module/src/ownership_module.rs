//! ECDSA ownership module: binds each account to one EOA owner and validates user operations
//! and ERC-1271 requests against that owner's secp256k1 signature.
//!
//! Every state change is scoped to the calling account. An account without an owner fails
//! closed: validation reverts with `NoOwnerRegisteredForSmartAccount` instead of comparing
//! against the zero address.

use alloc::string::String;

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
};

use smart_account_types::{
    decode_module_signature, ECDSA_MODULE_NAME, ECDSA_MODULE_VERSION, EIP1271_INVALID_VALUE, EIP1271_MAGIC_VALUE,
    MIN_SIGNATURE_LENGTH, SIG_VALIDATION_FAILED, VALIDATION_SUCCESS,
};

use crate::{
    errors::{
        AlreadyInitedForSmartAccount, ModuleError, NoOwnerRegisteredForSmartAccount, NotEOA, WrongSignatureLength,
        ZeroAddressNotAllowedAsOwner,
    },
    events::OwnershipTransferred,
    utils::crypto::SigningConvention,
};

/// `UserOperation` as it crosses the ABI: (sender, nonce, initCode, callData, callGasLimit,
/// verificationGasLimit, preVerificationGas, maxFeePerGas, maxPriorityFeePerGas,
/// paymasterAndData, signature).
pub type UserOperationTuple = (Address, U256, Bytes, Bytes, U256, U256, U256, U256, U256, Bytes, Bytes);

sol_storage! {
    #[entrypoint]
    pub struct EcdsaOwnershipModule {
        /// Owner EOA of every account that installed this module.
        mapping(address => address) smart_account_owners;
    }
}

#[public]
impl EcdsaOwnershipModule {
    /// Register `eoa_owner` for the calling account. Returns the module's own address so the
    /// call can serve as the account's module setup call.
    pub fn init(&mut self, eoa_owner: Address) -> Result<Address, ModuleError> {
        let account = self.vm().msg_sender();
        if self.smart_account_owners.get(account) != Address::ZERO {
            return Err(AlreadyInitedForSmartAccount { smartAccount: account }.into());
        }
        self._require_eoa_owner(eoa_owner)?;
        self._set_owner(account, eoa_owner);
        Ok(self.vm().contract_address())
    }

    pub fn transfer_ownership(&mut self, owner: Address) -> Result<(), ModuleError> {
        self._require_eoa_owner(owner)?;
        let account = self.vm().msg_sender();
        self._set_owner(account, owner);
        Ok(())
    }

    /// Clear the caller's owner. Validation for the account fails until a new owner is set.
    pub fn renounce_ownership(&mut self) {
        let account = self.vm().msg_sender();
        self._set_owner(account, Address::ZERO);
    }

    pub fn get_owner(&self, smart_account: Address) -> Result<Address, ModuleError> {
        self._owner(smart_account)
    }

    /// ERC-4337 validation data for `user_op`: success, or failure for any bad signature.
    /// Reverts only when the account has no owner.
    pub fn validate_user_op(
        &self,
        user_op: UserOperationTuple,
        user_op_hash: FixedBytes<32>,
    ) -> Result<U256, ModuleError> {
        let (sender, .., signature) = user_op;
        let Ok((signature, _module)) = decode_module_signature(&signature) else {
            return Ok(SIG_VALIDATION_FAILED);
        };
        match self._verify_signature(user_op_hash, &signature, sender) {
            Ok(true) => Ok(VALIDATION_SUCCESS),
            Ok(false) | Err(ModuleError::WrongSignatureLength(_)) => Ok(SIG_VALIDATION_FAILED),
            Err(err) => Err(err),
        }
    }

    /// ERC-1271 check against the owner of the calling account.
    pub fn is_valid_signature(
        &self,
        data_hash: FixedBytes<32>,
        module_signature: Bytes,
    ) -> Result<FixedBytes<4>, ModuleError> {
        let account = self.vm().msg_sender();
        self._is_valid_signature_for(data_hash, &module_signature, account)
    }

    pub fn is_valid_signature_for_address(
        &self,
        data_hash: FixedBytes<32>,
        module_signature: Bytes,
        smart_account: Address,
    ) -> Result<FixedBytes<4>, ModuleError> {
        self._is_valid_signature_for(data_hash, &module_signature, smart_account)
    }

    pub fn name(&self) -> String {
        ECDSA_MODULE_NAME.into()
    }

    pub fn version(&self) -> String {
        ECDSA_MODULE_VERSION.into()
    }
}

impl EcdsaOwnershipModule {
    fn _owner(&self, account: Address) -> Result<Address, ModuleError> {
        match self.smart_account_owners.get(account) {
            owner if owner == Address::ZERO => Err(NoOwnerRegisteredForSmartAccount { smartAccount: account }.into()),
            owner => Ok(owner),
        }
    }

    fn _is_valid_signature_for(
        &self,
        hash: FixedBytes<32>,
        signature: &[u8],
        account: Address,
    ) -> Result<FixedBytes<4>, ModuleError> {
        if self._verify_signature(hash, signature, account)? {
            Ok(EIP1271_MAGIC_VALUE)
        } else {
            Ok(EIP1271_INVALID_VALUE)
        }
    }

    /// True if the owner of `account` signed `hash` under any [`SigningConvention`].
    fn _verify_signature(&self, hash: FixedBytes<32>, signature: &[u8], account: Address) -> Result<bool, ModuleError> {
        let owner = self._owner(account)?;
        if signature.len() < MIN_SIGNATURE_LENGTH {
            return Err(WrongSignatureLength {}.into());
        }
        Ok(SigningConvention::ALL
            .iter()
            .any(|convention| self._recover(*convention, hash, signature) == Some(owner)))
    }

    fn _require_eoa_owner(&self, owner: Address) -> Result<(), ModuleError> {
        if owner == Address::ZERO {
            return Err(ZeroAddressNotAllowedAsOwner {}.into());
        }
        if self.vm().code_size(owner) > 0 {
            return Err(NotEOA { account: owner }.into());
        }
        Ok(())
    }

    fn _set_owner(&mut self, account: Address, owner: Address) {
        let previous = self.smart_account_owners.get(account);
        self.smart_account_owners.insert(account, owner);
        stylus_sdk::stylus_core::log(self.vm(), OwnershipTransferred { smartAccount: account, oldOwner: previous, newOwner: owner });
    }
}
