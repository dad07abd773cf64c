use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    error InvalidImplementation(address implementation);
}

#[derive(SolidityError, Debug)]
pub enum ProxyError {
    InvalidImplementation(InvalidImplementation),
}
