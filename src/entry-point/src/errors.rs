use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    /// Validation of operation `opIndex` failed; the whole bundle reverts.
    #[derive(Debug, PartialEq, Eq)]
    error FailedOp(uint256 opIndex, string reason);
    #[derive(Debug, PartialEq, Eq)]
    error InsufficientDeposit(address account, uint256 deposit, uint256 amount);
    #[derive(Debug, PartialEq, Eq)]
    error WithdrawalFailed(address withdrawAddress);
}

#[derive(SolidityError, Debug)]
pub enum EntryPointError {
    FailedOp(FailedOp),
    InsufficientDeposit(InsufficientDeposit),
    WithdrawalFailed(WithdrawalFailed),
}
