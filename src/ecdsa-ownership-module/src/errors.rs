use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    error NoOwnerRegisteredForSmartAccount(address smartAccount);
    #[derive(Debug, PartialEq, Eq)]
    error AlreadyInitedForSmartAccount(address smartAccount);
    #[derive(Debug, PartialEq, Eq)]
    error WrongSignatureLength();
    #[derive(Debug, PartialEq, Eq)]
    error NotEOA(address account);
    #[derive(Debug, PartialEq, Eq)]
    error ZeroAddressNotAllowedAsOwner();
}

#[derive(SolidityError, Debug)]
pub enum ModuleError {
    NoOwnerRegisteredForSmartAccount(NoOwnerRegisteredForSmartAccount),
    AlreadyInitedForSmartAccount(AlreadyInitedForSmartAccount),
    WrongSignatureLength(WrongSignatureLength),
    NotEOA(NotEOA),
    ZeroAddressNotAllowedAsOwner(ZeroAddressNotAllowedAsOwner),
}
