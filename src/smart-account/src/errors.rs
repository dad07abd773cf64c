//! Typed revert reasons of the account and its module registry.
//!
//! Every precondition failure is a Solidity custom error so callers can decode exactly which
//! check failed. Functions that forward an inner call's failure return its revert data
//! unchanged instead (`Result<_, Vec<u8>>`).

use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    // Caller authorization.
    #[derive(Debug, PartialEq, Eq)]
    error CallerIsNotEntryPoint(address caller);
    #[derive(Debug, PartialEq, Eq)]
    error CallerIsNotEntryPointOrSelf(address caller);
    #[derive(Debug, PartialEq, Eq)]
    error DelegateCallsOnly();

    // Account lifecycle.
    #[derive(Debug, PartialEq, Eq)]
    error AlreadyInitialized(address smartAccount);
    #[derive(Debug, PartialEq, Eq)]
    error AccountNotInitialized(address smartAccount);
    #[derive(Debug, PartialEq, Eq)]
    error WrongBatchProvided(uint256 destLength, uint256 valueLength, uint256 funcLength);

    // Module registry.
    #[derive(Debug, PartialEq, Eq)]
    error ModuleCannotBeZeroOrSentinel(address module);
    #[derive(Debug, PartialEq, Eq)]
    error ModuleAlreadyEnabled(address module);
    #[derive(Debug, PartialEq, Eq)]
    error ModuleNotEnabled(address module);
    #[derive(Debug, PartialEq, Eq)]
    error ModuleAndPrevModuleMismatch(address expectedModule, address returnedModule, address prevModule);
    #[derive(Debug, PartialEq, Eq)]
    error WrongModuleSetupAddress(address setupContract);
    #[derive(Debug, PartialEq, Eq)]
    error WrongModuleBatchProvided(
        uint256 toLength,
        uint256 valueLength,
        uint256 dataLength,
        uint256 operationsLength
    );
    #[derive(Debug, PartialEq, Eq)]
    error WrongPaginationPageSize(uint256 pageSize);
    #[derive(Debug, PartialEq, Eq)]
    error UnknownOperation(uint8 operation);
}

#[derive(SolidityError, Debug)]
pub enum AccountError {
    CallerIsNotEntryPoint(CallerIsNotEntryPoint),
    CallerIsNotEntryPointOrSelf(CallerIsNotEntryPointOrSelf),
    DelegateCallsOnly(DelegateCallsOnly),
    AlreadyInitialized(AlreadyInitialized),
    AccountNotInitialized(AccountNotInitialized),
    WrongBatchProvided(WrongBatchProvided),
    ModuleCannotBeZeroOrSentinel(ModuleCannotBeZeroOrSentinel),
    ModuleAlreadyEnabled(ModuleAlreadyEnabled),
    ModuleNotEnabled(ModuleNotEnabled),
    ModuleAndPrevModuleMismatch(ModuleAndPrevModuleMismatch),
    WrongModuleSetupAddress(WrongModuleSetupAddress),
    WrongModuleBatchProvided(WrongModuleBatchProvided),
    WrongPaginationPageSize(WrongPaginationPageSize),
    UnknownOperation(UnknownOperation),
}
