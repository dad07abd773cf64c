use alloy_sol_types::{SolCall, SolEvent};
use smart_account_signer::{encode_erc20_approve, encode_erc20_transfer};
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{address, aliases::U192, keccak256, Address, FixedBytes, U256},
    testing::*,
};

use smart_account_types::{IEntryPoint, IERC20, ENTRY_POINT_ADDRESS, SENTINEL_MODULES};

use crate::{
    account::{SmartAccount, UserOperationTuple},
    errors::*,
    events::*,
};

const ACCOUNT: Address = address!("00000000000000000000000000000000000a11ce");
const SETUP: Address = address!("5e7a5e7a5e7a5e7a5e7a5e7a5e7a5e7a5e7a5e7a");
const MODULE: Address = address!("0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d");
const TOKEN: Address = address!("70c0e70c0e70c0e70c0e70c0e70c0e70c0e70c0e");
const SPENDER: Address = address!("5bede5bede5bede5bede5bede5bede5bede5bede");
const STRANGER: Address = address!("baadbaadbaadbaadbaadbaadbaadbaadbaadbaad");

fn revert(err: impl Into<AccountError>) -> Vec<u8> {
    err.into().into()
}

fn logged<E: SolEvent>(vm: &TestVM) -> Vec<E> {
    vm.get_emitted_logs()
        .into_iter()
        .filter(|(topics, _)| topics.first() == Some(&E::SIGNATURE_HASH))
        .map(|(topics, data)| E::decode_raw_log(topics, &data, true).expect("event decodes"))
        .collect()
}

fn setup_data() -> Bytes {
    vec![0x5e, 0x70].into()
}

/// A proxy-side account (no constructor ran in this storage) with `MODULE` enabled.
fn initialized_account(vm: &TestVM) -> SmartAccount {
    vm.set_contract_address(ACCOUNT);
    vm.mock_call(SETUP, setup_data().to_vec(), U256::ZERO, Ok(MODULE.into_word().to_vec()));
    let mut account = SmartAccount::from(vm);
    vm.set_sender(STRANGER);
    assert_eq!(account.init(SETUP, setup_data()).expect("init"), MODULE);
    account
}

fn user_op() -> UserOperationTuple {
    (
        ACCOUNT,
        U256::ZERO,
        Bytes::from(Vec::new()),
        Bytes::from(Vec::new()),
        U256::from(100_000u64),
        U256::from(100_000u64),
        U256::from(21_000u64),
        U256::from(1u64),
        U256::from(1u64),
        Bytes::from(Vec::new()),
        Bytes::from(Vec::new()),
    )
}

#[test]
fn init_enables_the_module_returned_by_setup() {
    let vm = TestVM::default();
    let account = initialized_account(&vm);

    assert!(account.is_initialized());
    assert!(account.is_module_enabled(MODULE));
    assert_eq!(logged::<EnabledModule>(&vm), vec![EnabledModule { module: MODULE }]);
    assert_eq!(account.entry_point(), ENTRY_POINT_ADDRESS);
    assert_eq!(account.version(), "1");
}

#[test]
fn init_runs_once() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);

    let err = account.init(SETUP, setup_data()).unwrap_err();
    assert_eq!(err, revert(AlreadyInitialized { smartAccount: ACCOUNT }));
}

#[test]
fn implementation_cannot_be_initialized_or_funded_directly() {
    let vm = TestVM::default();
    vm.set_contract_address(ACCOUNT);
    let mut implementation = SmartAccount::from(&vm);
    implementation.constructor();

    assert_eq!(implementation.init(SETUP, setup_data()).unwrap_err(), revert(DelegateCallsOnly {}));
    assert_eq!(implementation.receive().unwrap_err(), revert(DelegateCallsOnly {}));
    assert!(!implementation.is_initialized());
}

#[test]
fn init_rejects_zero_setup_contract() {
    let vm = TestVM::default();
    vm.set_contract_address(ACCOUNT);
    let mut account = SmartAccount::from(&vm);

    let err = account.init(Address::ZERO, setup_data()).unwrap_err();
    assert_eq!(err, revert(WrongModuleSetupAddress { setupContract: Address::ZERO }));
}

#[test]
fn setup_revert_data_is_forwarded() {
    let vm = TestVM::default();
    vm.set_contract_address(ACCOUNT);
    vm.mock_call(SETUP, setup_data().to_vec(), U256::ZERO, Err(vec![0xde, 0xad]));
    let mut account = SmartAccount::from(&vm);

    assert_eq!(account.init(SETUP, setup_data()).unwrap_err(), vec![0xde, 0xad]);
}

#[test]
fn setup_returning_nothing_enables_no_module() {
    let vm = TestVM::default();
    vm.set_contract_address(ACCOUNT);
    vm.mock_call(SETUP, setup_data().to_vec(), U256::ZERO, Ok(Vec::new()));
    let mut account = SmartAccount::from(&vm);

    let err = account.init(SETUP, setup_data()).unwrap_err();
    assert_eq!(err, revert(ModuleCannotBeZeroOrSentinel { module: Address::ZERO }));
}

#[test]
fn execute_is_gated_on_the_entry_point() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);

    vm.set_sender(STRANGER);
    let err = account.execute(TOKEN, U256::ZERO, Bytes::from(Vec::new())).unwrap_err();
    assert_eq!(err, revert(CallerIsNotEntryPoint { caller: STRANGER }));

    // Self-calls are not enough for execution.
    vm.set_sender(ACCOUNT);
    let err = account.execute(TOKEN, U256::ZERO, Bytes::from(Vec::new())).unwrap_err();
    assert_eq!(err, revert(CallerIsNotEntryPoint { caller: ACCOUNT }));
}

#[test]
fn execute_requires_initialization() {
    let vm = TestVM::default();
    vm.set_contract_address(ACCOUNT);
    let mut account = SmartAccount::from(&vm);

    vm.set_sender(ENTRY_POINT_ADDRESS);
    let err = account.execute(TOKEN, U256::ZERO, Bytes::from(Vec::new())).unwrap_err();
    assert_eq!(err, revert(AccountNotInitialized { smartAccount: ACCOUNT }));
}

#[test]
fn execute_forwards_call_and_revert_data() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let call = IERC20::transferCall { to: SPENDER, amount: U256::from(5u64) }.abi_encode();
    vm.mock_call(TOKEN, call.clone(), U256::ZERO, Err(b"insufficient".to_vec()));
    let err = account.execute(TOKEN, U256::ZERO, call.into()).unwrap_err();
    assert_eq!(err, b"insufficient".to_vec());

    vm.mock_call(SPENDER, Vec::new(), U256::from(3u64), Ok(Vec::new()));
    account.execute(SPENDER, U256::from(3u64), Bytes::from(Vec::new())).expect("value transfer");
}

#[test]
fn empty_batch_is_a_shape_error() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let err = account.execute_batch(Vec::new(), Vec::new(), Vec::new()).unwrap_err();
    assert_eq!(
        err,
        revert(WrongBatchProvided { destLength: U256::ZERO, valueLength: U256::ZERO, funcLength: U256::ZERO })
    );
}

#[test]
fn mismatched_batch_is_a_shape_error() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let err = account
        .execute_batch(vec![TOKEN, TOKEN], vec![U256::ZERO], vec![Bytes::from(Vec::new()), Bytes::from(Vec::new())])
        .unwrap_err();
    assert_eq!(
        err,
        revert(WrongBatchProvided {
            destLength: U256::from(2u64),
            valueLength: U256::from(1u64),
            funcLength: U256::from(2u64),
        })
    );
}

#[test]
fn batch_approves_then_transfers_to_the_spender() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let amount = U256::from(10u64);
    let approve = encode_erc20_approve(SPENDER, amount);
    let transfer = encode_erc20_transfer(SPENDER, amount);
    let ok = IERC20::transferCall::abi_encode_returns(&(true,));
    vm.mock_call(TOKEN, approve.clone(), U256::ZERO, Ok(ok.clone()));
    vm.mock_call(TOKEN, transfer.clone(), U256::ZERO, Ok(ok));

    account
        .execute_batch(vec![TOKEN, TOKEN], vec![U256::ZERO, U256::ZERO], vec![approve.into(), transfer.into()])
        .expect("approve and transfer");
}

#[test]
fn batch_reverts_with_the_first_failure() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let first = IERC20::approveCall { spender: SPENDER, amount: U256::from(1u64) }.abi_encode();
    let second = IERC20::transferCall { to: SPENDER, amount: U256::from(1_000u64) }.abi_encode();
    vm.mock_call(TOKEN, first.clone(), U256::ZERO, Ok(IERC20::approveCall::abi_encode_returns(&(true,))));
    vm.mock_call(TOKEN, second.clone(), U256::ZERO, Err(b"balance".to_vec()));

    let err = account
        .execute_batch(vec![TOKEN, TOKEN], vec![U256::ZERO, U256::ZERO], vec![first.into(), second.into()])
        .unwrap_err();
    assert_eq!(err, b"balance".to_vec());
}

#[test]
fn validate_user_op_prefunds_the_entry_point() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let missing = U256::from(1_000u64);
    vm.mock_call(ENTRY_POINT_ADDRESS, Vec::new(), missing, Ok(Vec::new()));
    let validation = account.validate_user_op(user_op(), FixedBytes::ZERO, missing).expect("validates");
    assert_eq!(validation, U256::ZERO);
}

#[test]
fn failed_prefund_still_validates() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(ENTRY_POINT_ADDRESS);

    let missing = U256::from(1_000u64);
    vm.mock_call(ENTRY_POINT_ADDRESS, Vec::new(), missing, Err(Vec::new()));
    let validation = account.validate_user_op(user_op(), FixedBytes::ZERO, missing).expect("validates");
    assert_eq!(validation, U256::ZERO);
}

#[test]
fn validate_user_op_is_gated_on_the_entry_point() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    vm.set_sender(STRANGER);

    let err = account.validate_user_op(user_op(), FixedBytes::ZERO, U256::ZERO).unwrap_err();
    assert!(matches!(err, AccountError::CallerIsNotEntryPoint(_)));
}

#[test]
fn deposits_go_through_the_entry_point() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);

    let value = U256::from(5_000u64);
    vm.set_sender(STRANGER);
    vm.set_value(value);
    let deposit = IEntryPoint::depositToCall { account: ACCOUNT }.abi_encode();
    vm.mock_call(ENTRY_POINT_ADDRESS, deposit, value, Ok(Vec::new()));
    account.add_deposit().expect("deposit");
    vm.set_value(U256::ZERO);

    let balance = IEntryPoint::balanceOfCall { account: ACCOUNT }.abi_encode();
    let returns = IEntryPoint::balanceOfCall::abi_encode_returns(&(value,));
    vm.mock_static_call(ENTRY_POINT_ADDRESS, balance, Ok(returns));
    assert_eq!(account.get_deposit().expect("balance"), value);

    let key = U192::from(7u64);
    let nonce = IEntryPoint::getNonceCall { sender: ACCOUNT, key }.abi_encode();
    let returns = IEntryPoint::getNonceCall::abi_encode_returns(&(U256::from(42u64),));
    vm.mock_static_call(ENTRY_POINT_ADDRESS, nonce, Ok(returns));
    assert_eq!(account.nonce(key).expect("nonce"), U256::from(42u64));
}

#[test]
fn withdrawals_come_from_the_entry_point_or_the_account() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);
    let amount = U256::from(9u64);
    let withdraw = IEntryPoint::withdrawToCall { withdrawAddress: SPENDER, withdrawAmount: amount }.abi_encode();
    vm.mock_call(ENTRY_POINT_ADDRESS, withdraw, U256::ZERO, Ok(Vec::new()));

    vm.set_sender(STRANGER);
    let err = account.withdraw_deposit_to(SPENDER, amount).unwrap_err();
    assert_eq!(err, revert(CallerIsNotEntryPointOrSelf { caller: STRANGER }));

    vm.set_sender(ACCOUNT);
    account.withdraw_deposit_to(SPENDER, amount).expect("self withdrawal");
    vm.set_sender(ENTRY_POINT_ADDRESS);
    account.withdraw_deposit_to(SPENDER, amount).expect("entry point withdrawal");
}

#[test]
fn receive_logs_the_sender_and_value() {
    let vm = TestVM::default();
    let mut account = initialized_account(&vm);

    vm.set_sender(STRANGER);
    vm.set_value(U256::from(77u64));
    account.receive().expect("receive");
    assert_eq!(
        logged::<SmartAccountReceivedNativeToken>(&vm),
        vec![SmartAccountReceivedNativeToken { sender: STRANGER, value: U256::from(77u64) }]
    );
}

mod registry {
    use super::*;

    const SECOND: Address = address!("0000000000000000000000000000000000000b0b");
    const THIRD: Address = address!("0000000000000000000000000000000000000c0c");

    fn account_with_three_modules(vm: &TestVM) -> SmartAccount {
        let mut account = initialized_account(vm);
        vm.set_sender(ENTRY_POINT_ADDRESS);
        account.enable_module(SECOND).expect("enable second");
        account.enable_module(THIRD).expect("enable third");
        account
    }

    #[test]
    fn modules_are_listed_newest_first() {
        let vm = TestVM::default();
        let account = account_with_three_modules(&vm);

        let (page, next) = account.get_modules_paginated(SENTINEL_MODULES, U256::from(10u64)).expect("page");
        assert_eq!(page, vec![THIRD, SECOND, MODULE]);
        assert_eq!(next, SENTINEL_MODULES);
    }

    #[test]
    fn pagination_cursor_resumes_after_last_entry() {
        let vm = TestVM::default();
        let account = account_with_three_modules(&vm);

        let (page, next) = account.get_modules_paginated(SENTINEL_MODULES, U256::from(2u64)).expect("page");
        assert_eq!(page, vec![THIRD, SECOND]);
        assert_eq!(next, SECOND);

        let (page, next) = account.get_modules_paginated(next, U256::from(2u64)).expect("page");
        assert_eq!(page, vec![MODULE]);
        assert_eq!(next, SENTINEL_MODULES);
    }

    #[test]
    fn pagination_rejects_bad_arguments() {
        let vm = TestVM::default();
        let account = account_with_three_modules(&vm);

        let err = account.get_modules_paginated(SENTINEL_MODULES, U256::ZERO).unwrap_err();
        assert!(matches!(err, AccountError::WrongPaginationPageSize(_)));
        let err = account.get_modules_paginated(STRANGER, U256::from(1u64)).unwrap_err();
        assert!(matches!(err, AccountError::ModuleNotEnabled(ModuleNotEnabled { module }) if module == STRANGER));
    }

    #[test]
    fn empty_registry_pages_to_nothing() {
        let vm = TestVM::default();
        vm.set_contract_address(ACCOUNT);
        let account = SmartAccount::from(&vm);

        let (page, next) = account.get_modules_paginated(SENTINEL_MODULES, U256::from(5u64)).expect("page");
        assert!(page.is_empty());
        assert_eq!(next, SENTINEL_MODULES);
    }

    #[test]
    fn enable_rejects_zero_sentinel_and_duplicates() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(ENTRY_POINT_ADDRESS);

        for module in [Address::ZERO, SENTINEL_MODULES] {
            let err = account.enable_module(module).unwrap_err();
            assert!(matches!(err, AccountError::ModuleCannotBeZeroOrSentinel(e) if e.module == module));
        }
        let err = account.enable_module(MODULE).unwrap_err();
        assert!(matches!(err, AccountError::ModuleAlreadyEnabled(_)));
    }

    #[test]
    fn disable_rejects_zero_and_sentinel() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(ENTRY_POINT_ADDRESS);

        for module in [Address::ZERO, SENTINEL_MODULES] {
            let err = account.disable_module(SENTINEL_MODULES, module).unwrap_err();
            assert!(matches!(err, AccountError::ModuleCannotBeZeroOrSentinel(e) if e.module == module));
        }
        // The registry is untouched.
        assert!(account.is_module_enabled(MODULE));
        assert!(logged::<DisabledModule>(&vm).is_empty());
    }

    #[test]
    fn disable_requires_the_matching_predecessor() {
        let vm = TestVM::default();
        let mut account = account_with_three_modules(&vm);

        let err = account.disable_module(SENTINEL_MODULES, MODULE).unwrap_err();
        match err {
            AccountError::ModuleAndPrevModuleMismatch(e) => {
                assert_eq!(e.expectedModule, MODULE);
                assert_eq!(e.returnedModule, THIRD);
                assert_eq!(e.prevModule, SENTINEL_MODULES);
            }
            other => panic!("unexpected error {other:?}"),
        }

        account.disable_module(SECOND, MODULE).expect("disable tail");
        assert!(!account.is_module_enabled(MODULE));
        let (page, _) = account.get_modules_paginated(SENTINEL_MODULES, U256::from(10u64)).expect("page");
        assert_eq!(page, vec![THIRD, SECOND]);
        assert_eq!(logged::<DisabledModule>(&vm), vec![DisabledModule { module: MODULE }]);
    }

    #[test]
    fn registry_changes_come_from_entry_point_or_self() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);

        vm.set_sender(MODULE);
        let err = account.enable_module(SECOND).unwrap_err();
        assert!(matches!(err, AccountError::CallerIsNotEntryPointOrSelf(_)));

        vm.set_sender(ACCOUNT);
        account.enable_module(SECOND).expect("self enable");
        account.disable_module(SENTINEL_MODULES, SECOND).expect("self disable");
    }

    #[test]
    fn setup_and_enable_module_uses_setup_return_data() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(ENTRY_POINT_ADDRESS);

        let data: Bytes = vec![0x01].into();
        vm.mock_call(SETUP, data.to_vec(), U256::ZERO, Ok(SECOND.into_word().to_vec()));
        assert_eq!(account.setup_and_enable_module(SETUP, data).expect("setup"), SECOND);
        assert!(account.is_module_enabled(SECOND));
    }
}

mod module_execution {
    use super::*;

    fn call_data() -> Bytes {
        IERC20::transferCall { to: SPENDER, amount: U256::from(1u64) }.abi_encode().into()
    }

    #[test]
    fn only_enabled_modules_execute() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);

        vm.set_sender(STRANGER);
        let err = account.exec_transaction_from_module(TOKEN, U256::ZERO, call_data(), 0, U256::ZERO).unwrap_err();
        assert!(matches!(err, AccountError::ModuleNotEnabled(e) if e.module == STRANGER));
    }

    #[test]
    fn success_is_reported_with_events() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);
        vm.mock_call(TOKEN, call_data().to_vec(), U256::ZERO, Ok(Vec::new()));

        let tx_gas = U256::from(50_000u64);
        assert!(account.exec_transaction_from_module(TOKEN, U256::ZERO, call_data(), 0, tx_gas).expect("exec"));
        assert_eq!(
            logged::<ExecutionSuccess>(&vm),
            vec![ExecutionSuccess {
                to: TOKEN,
                value: U256::ZERO,
                data: keccak256(call_data().as_slice()),
                operation: 0,
                txGas: tx_gas,
            }]
        );
        assert_eq!(logged::<ExecutionFromModuleSuccess>(&vm), vec![ExecutionFromModuleSuccess { module: MODULE }]);
    }

    #[test]
    fn failure_is_reported_not_reverted() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);
        vm.mock_call(TOKEN, call_data().to_vec(), U256::ZERO, Err(b"nope".to_vec()));

        assert!(!account.exec_transaction_from_module(TOKEN, U256::ZERO, call_data(), 0, U256::ZERO).expect("exec"));
        assert_eq!(logged::<ExecutionFailure>(&vm).len(), 1);
        assert_eq!(logged::<ExecutionFromModuleFailure>(&vm), vec![ExecutionFromModuleFailure { module: MODULE }]);

        let (success, data) = account
            .exec_transaction_from_module_return_data(TOKEN, U256::ZERO, call_data(), 0)
            .expect("exec");
        assert!(!success);
        assert_eq!(data.to_vec(), b"nope".to_vec());
    }

    #[test]
    fn return_data_is_handed_back() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);
        let returns = IERC20::transferCall::abi_encode_returns(&(true,));
        vm.mock_call(TOKEN, call_data().to_vec(), U256::ZERO, Ok(returns.clone()));

        let (success, data) = account
            .exec_transaction_from_module_return_data(TOKEN, U256::ZERO, call_data(), 0)
            .expect("exec");
        assert!(success);
        assert_eq!(data.to_vec(), returns);
    }

    #[test]
    fn delegatecall_runs_in_account_context() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);
        vm.mock_delegate_call(TOKEN, call_data().to_vec(), Ok(Vec::new()));

        assert!(account.exec_transaction_from_module(TOKEN, U256::ZERO, call_data(), 1, U256::ZERO).expect("exec"));
        assert_eq!(logged::<ExecutionSuccess>(&vm)[0].operation, 1);
    }

    #[test]
    fn unknown_operation_reverts() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);

        let err = account.exec_transaction_from_module(TOKEN, U256::ZERO, call_data(), 2, U256::ZERO).unwrap_err();
        assert!(matches!(err, AccountError::UnknownOperation(e) if e.operation == 2));
    }

    #[test]
    fn empty_module_batch_is_a_shape_error() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);

        let err = account
            .exec_batch_transaction_from_module(Vec::new(), Vec::new(), Vec::new(), Vec::new())
            .unwrap_err();
        assert_eq!(
            revert(err),
            revert(WrongModuleBatchProvided {
                toLength: U256::ZERO,
                valueLength: U256::ZERO,
                dataLength: U256::ZERO,
                operationsLength: U256::ZERO,
            })
        );
    }

    #[test]
    fn batch_runs_every_entry_and_reports_overall_success() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);

        let failing: Bytes = vec![0xf0].into();
        vm.mock_call(TOKEN, failing.to_vec(), U256::ZERO, Err(Vec::new()));
        vm.mock_call(SPENDER, call_data().to_vec(), U256::ZERO, Ok(Vec::new()));

        let success = account
            .exec_batch_transaction_from_module(
                vec![TOKEN, SPENDER],
                vec![U256::ZERO, U256::ZERO],
                vec![failing, call_data()],
                vec![0, 0],
            )
            .expect("batch");
        assert!(!success);
        assert_eq!(logged::<ExecutionFailure>(&vm).len(), 1);
        assert_eq!(logged::<ExecutionSuccess>(&vm).len(), 1);
    }

    #[test]
    fn batch_with_unknown_operation_runs_nothing() {
        let vm = TestVM::default();
        let mut account = initialized_account(&vm);
        vm.set_sender(MODULE);

        let err = account
            .exec_batch_transaction_from_module(
                vec![TOKEN, TOKEN],
                vec![U256::ZERO, U256::ZERO],
                vec![call_data(), call_data()],
                vec![0, 9],
            )
            .unwrap_err();
        assert!(matches!(err, AccountError::UnknownOperation(e) if e.operation == 9));
        assert!(logged::<ExecutionSuccess>(&vm).is_empty());
    }
}
