use alloc::{string::ToString, vec::Vec};

use alloy_sol_types::SolCall;
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{aliases::U192, Address, FixedBytes, B256, U256},
    call::Call,
    prelude::*,
};

use smart_account_types::{required_prefund, user_op_hash, ISmartAccount, UserOperation};

use crate::{
    errors::{EntryPointError, FailedOp, InsufficientDeposit, WithdrawalFailed},
    events::{AccountDeployed, Deposited, UserOperationEvent, UserOperationRevertReason, Withdrawn},
    nonce::{compose_nonce, split_nonce},
};

/// `UserOperation` as it crosses the ABI: (sender, nonce, initCode, callData, callGasLimit,
/// verificationGasLimit, preVerificationGas, maxFeePerGas, maxPriorityFeePerGas,
/// paymasterAndData, signature).
pub type UserOperationTuple = (Address, U256, Bytes, Bytes, U256, U256, U256, U256, U256, Bytes, Bytes);

pub fn user_operation(op: UserOperationTuple) -> UserOperation {
    let (
        sender,
        nonce,
        init_code,
        call_data,
        call_gas,
        verification_gas,
        pre_verification_gas,
        max_fee,
        priority_fee,
        paymaster,
        signature,
    ) = op;
    UserOperation {
        sender,
        nonce,
        initCode: init_code.to_vec().into(),
        callData: call_data.to_vec().into(),
        callGasLimit: call_gas,
        verificationGasLimit: verification_gas,
        preVerificationGas: pre_verification_gas,
        maxFeePerGas: max_fee,
        maxPriorityFeePerGas: priority_fee,
        paymasterAndData: paymaster.to_vec().into(),
        signature: signature.to_vec().into(),
    }
}

sol_storage! {
    #[entrypoint]
    pub struct EntryPoint {
        mapping(address => uint256) deposits;
        /// sender => key => next sequence
        mapping(address => mapping(uint192 => uint256)) nonce_sequences;
    }
}

// An operation that passed validation and awaits execution.
struct Validated {
    hash: B256,
    prefund: U256,
}

#[public]
impl EntryPoint {
    #[payable]
    pub fn deposit_to(&mut self, account: Address) {
        let value = self.vm().msg_value();
        self._credit(account, value);
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.deposits.get(account)
    }

    /// Pay `withdraw_amount` of the caller's deposit out to `withdraw_address`.
    pub fn withdraw_to(&mut self, withdraw_address: Address, withdraw_amount: U256) -> Result<(), EntryPointError> {
        let account = self.vm().msg_sender();
        let deposit = self.deposits.get(account);
        if withdraw_amount > deposit {
            return Err(InsufficientDeposit { account, deposit, amount: withdraw_amount }.into());
        }
        self.deposits.insert(account, deposit - withdraw_amount);
        stylus_sdk::stylus_core::log(self.vm(), Withdrawn { account, withdrawAddress: withdraw_address, amount: withdraw_amount });
        self._transfer(withdraw_address, withdraw_amount)
            .map_err(|_| WithdrawalFailed { withdrawAddress: withdraw_address })?;
        Ok(())
    }

    pub fn get_nonce(&self, sender: Address, key: U192) -> U256 {
        let sequence = self.nonce_sequences.getter(sender).get(key);
        compose_nonce(key, sequence.saturating_to::<u64>())
    }

    pub fn get_user_op_hash(&self, user_op: UserOperationTuple) -> FixedBytes<32> {
        self._user_op_hash(&user_operation(user_op))
    }

    /// Validate every operation, then execute every operation, then pay the beneficiary.
    /// A validation failure reverts the whole bundle with `FailedOp`; an execution failure is
    /// recorded in the operation's events and does not affect the others.
    pub fn handle_ops(&mut self, ops: Vec<UserOperationTuple>, beneficiary: Address) -> Result<(), EntryPointError> {
        let ops: Vec<UserOperation> = ops.into_iter().map(user_operation).collect();

        let mut validated = Vec::with_capacity(ops.len());
        for (index, op) in ops.iter().enumerate() {
            validated.push(self._validate_op(index, op)?);
        }

        let mut collected = U256::ZERO;
        for (op, Validated { hash, prefund }) in ops.iter().zip(validated) {
            let ctx = Call::new_payable(self, U256::ZERO).gas(op.callGasLimit.saturating_to::<u64>());
            let result = self.vm().call(&ctx, op.sender, &op.callData).map_err(Vec::<u8>::from);
            if let Err(reason) = &result {
                stylus_sdk::stylus_core::log(self.vm(), UserOperationRevertReason {
                    userOpHash: hash,
                    sender: op.sender,
                    nonce: op.nonce,
                    revertReason: reason.clone().into(),
                });
            }
            stylus_sdk::stylus_core::log(self.vm(), UserOperationEvent {
                userOpHash: hash,
                sender: op.sender,
                paymaster: Address::ZERO,
                nonce: op.nonce,
                success: result.is_ok(),
                actualGasCost: prefund,
                actualGasUsed: op
                    .callGasLimit
                    .saturating_add(op.verificationGasLimit)
                    .saturating_add(op.preVerificationGas),
            });
            collected = collected.saturating_add(prefund);
        }

        if !collected.is_zero() {
            self._transfer(beneficiary, collected).map_err(|_| failed_op(0, "AA91 failed send to beneficiary"))?;
        }
        Ok(())
    }

    /// Plain transfers credit the sender's deposit.
    #[receive]
    #[payable]
    pub fn receive(&mut self) -> Result<(), Vec<u8>> {
        let sender = self.vm().msg_sender();
        let value = self.vm().msg_value();
        self._credit(sender, value);
        Ok(())
    }
}

impl EntryPoint {
    fn _credit(&mut self, account: Address, amount: U256) {
        let total = self.deposits.get(account).saturating_add(amount);
        self.deposits.insert(account, total);
        stylus_sdk::stylus_core::log(self.vm(), Deposited { account, totalDeposit: total });
    }

    fn _transfer(&mut self, to: Address, amount: U256) -> Result<Vec<u8>, Vec<u8>> {
        let ctx = Call::new_payable(self, amount);
        self.vm().call(&ctx, to, &[]).map_err(Vec::<u8>::from)
    }

    fn _user_op_hash(&self, op: &UserOperation) -> B256 {
        user_op_hash(op, self.vm().contract_address(), self.vm().chain_id())
    }

    fn _is_contract(&self, account: Address) -> bool {
        self.vm().code_size(account) > 0
    }

    fn _validate_op(&mut self, index: usize, op: &UserOperation) -> Result<Validated, EntryPointError> {
        let hash = self._user_op_hash(op);
        let sender = op.sender;

        if !op.paymasterAndData.is_empty() {
            return Err(failed_op(index, "AA30 paymaster not supported"));
        }
        if !op.initCode.is_empty() {
            self._create_sender(index, hash, op)?;
        } else if !self._is_contract(sender) {
            return Err(failed_op(index, "AA20 account not deployed"));
        }

        if !self._use_nonce(sender, op.nonce) {
            return Err(failed_op(index, "AA25 invalid account nonce"));
        }

        let prefund = required_prefund(op);
        let missing = prefund.saturating_sub(self.deposits.get(sender));
        let call = ISmartAccount::validateUserOpCall { userOp: op.clone(), userOpHash: hash, missingAccountFunds: missing };
        let ctx = Call::new_payable(self, U256::ZERO).gas(op.verificationGasLimit.saturating_to::<u64>());
        let out = self
            .vm()
            .call(&ctx, sender, &call.abi_encode())
            .map_err(|_| failed_op(index, "AA23 reverted (or OOG)"))?;
        let validation = ISmartAccount::validateUserOpCall::abi_decode_returns(&out, true)
            .map_err(|_| failed_op(index, "AA23 reverted (or OOG)"))?
            .validationData;

        let deposit = self.deposits.get(sender);
        if deposit < prefund {
            return Err(failed_op(index, "AA21 didn't pay prefund"));
        }
        self.deposits.insert(sender, deposit - prefund);
        if !validation.is_zero() {
            return Err(failed_op(index, "AA24 signature error"));
        }
        Ok(Validated { hash, prefund })
    }

    // `initCode` is the factory address followed by the calldata to send it.
    fn _create_sender(&mut self, index: usize, hash: B256, op: &UserOperation) -> Result<(), EntryPointError> {
        if self._is_contract(op.sender) {
            return Err(failed_op(index, "AA10 sender already constructed"));
        }
        if op.initCode.len() < 20 {
            return Err(failed_op(index, "AA13 initCode failed or OOG"));
        }
        let factory = Address::from_slice(&op.initCode[..20]);
        let ctx = Call::new_payable(self, U256::ZERO).gas(op.verificationGasLimit.saturating_to::<u64>());
        let out = self
            .vm()
            .call(&ctx, factory, &op.initCode[20..])
            .map_err(|_| failed_op(index, "AA13 initCode failed or OOG"))?;
        if out.len() < 32 || Address::from_slice(&out[12..32]) != op.sender {
            return Err(failed_op(index, "AA14 initCode must return sender"));
        }
        if !self._is_contract(op.sender) {
            return Err(failed_op(index, "AA15 initCode must create sender"));
        }
        stylus_sdk::stylus_core::log(self.vm(), AccountDeployed { userOpHash: hash, sender: op.sender, factory, paymaster: Address::ZERO });
        Ok(())
    }

    /// Consume `nonce` if it is the next one of its key's sequence.
    fn _use_nonce(&mut self, sender: Address, nonce: U256) -> bool {
        let (key, sequence) = split_nonce(nonce);
        let current = self.nonce_sequences.getter(sender).get(key);
        if current != U256::from(sequence) {
            return false;
        }
        self.nonce_sequences.setter(sender).insert(key, current.saturating_add(U256::from(1u64)));
        true
    }
}

fn failed_op(index: usize, reason: &str) -> EntryPointError {
    FailedOp { opIndex: U256::from(index), reason: reason.to_string() }.into()
}
