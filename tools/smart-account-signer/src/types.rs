use alloy_primitives::{Address, Bytes, U256};

/// Which digest the owner signs for a given hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashConvention {
    /// Sign the 32-byte hash directly.
    Raw,
    /// Sign `keccak256("\x19Ethereum Signed Message:\n32" || hash)`, as wallets do for
    /// `personal_sign`.
    EthSignedMessage,
}

/// One call an account makes through `execute`/`executeBatch`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountCall {
    pub dest: Address,
    pub value: U256,
    pub func: Bytes,
}

impl AccountCall {
    pub fn new(dest: Address, value: U256, func: impl Into<Bytes>) -> Self {
        Self { dest, value, func: func.into() }
    }
}

/// Gas and fee fields of a user operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasParams {
    pub call_gas_limit: U256,
    pub verification_gas_limit: U256,
    pub pre_verification_gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

impl Default for GasParams {
    fn default() -> Self {
        Self {
            call_gas_limit: U256::from(500_000u64),
            verification_gas_limit: U256::from(1_000_000u64),
            pre_verification_gas: U256::from(50_000u64),
            max_fee_per_gas: U256::from(1u64),
            max_priority_fee_per_gas: U256::from(1u64),
        }
    }
}
