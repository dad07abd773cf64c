use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use smart_account_types::{IEcdsaOwnershipModule, ISmartAccount, ISmartAccountFactory, UserOperation, IERC20};

use crate::types::{AccountCall, GasParams};

/// `execute(dest, value, func)` calldata for the account.
pub fn encode_execute(call: &AccountCall) -> Vec<u8> {
    ISmartAccount::executeCall { dest: call.dest, value: call.value, func: call.func.clone() }.abi_encode()
}

/// `executeBatch(dest[], value[], func[])` calldata for the account.
pub fn encode_execute_batch(calls: &[AccountCall]) -> Vec<u8> {
    ISmartAccount::executeBatchCall {
        dest: calls.iter().map(|c| c.dest).collect(),
        value: calls.iter().map(|c| c.value).collect(),
        func: calls.iter().map(|c| c.func.clone()).collect(),
    }
    .abi_encode()
}

/// Setup data that registers `owner` when the account calls the ECDSA module.
pub fn encode_ecdsa_module_setup(owner: Address) -> Vec<u8> {
    IEcdsaOwnershipModule::initCall { eoaOwner: owner }.abi_encode()
}

/// `deploySmartAccount(salt, module, init(owner))` for the factory.
pub fn encode_deploy_account(salt: U256, module: Address, owner: Address) -> Vec<u8> {
    ISmartAccountFactory::deploySmartAccountCall {
        salt,
        initialTarget: module,
        initData: encode_ecdsa_module_setup(owner).into(),
    }
    .abi_encode()
}

/// User operation `initCode`: the factory address followed by its deploy calldata.
pub fn encode_init_code(factory: Address, salt: U256, module: Address, owner: Address) -> Vec<u8> {
    let mut code = factory.to_vec();
    code.extend_from_slice(&encode_deploy_account(salt, module, owner));
    code
}

pub fn encode_erc20_transfer(to: Address, amount: U256) -> Vec<u8> {
    IERC20::transferCall { to, amount }.abi_encode()
}

pub fn encode_erc20_approve(spender: Address, amount: U256) -> Vec<u8> {
    IERC20::approveCall { spender, amount }.abi_encode()
}

/// Unsigned user operation for `sender`.
pub fn build_user_op(
    sender: Address,
    nonce: U256,
    init_code: Vec<u8>,
    call_data: Vec<u8>,
    gas: GasParams,
) -> UserOperation {
    UserOperation {
        sender,
        nonce,
        initCode: init_code.into(),
        callData: call_data.into(),
        callGasLimit: gas.call_gas_limit,
        verificationGasLimit: gas.verification_gas_limit,
        preVerificationGas: gas.pre_verification_gas,
        maxFeePerGas: gas.max_fee_per_gas,
        maxPriorityFeePerGas: gas.max_priority_fee_per_gas,
        paymasterAndData: Bytes::new(),
        signature: Bytes::new(),
    }
}
