#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

#[cfg(not(any(test, feature = "export-abi")))]
#[no_mangle]
pub extern "C" fn main() {}

#[cfg(feature = "export-abi")]
fn main() {
    use account_proxy::AccountProxy;
    use stylus_sdk::abi::export::print_abi;

    print_abi::<AccountProxy>("MIT", "pragma solidity ^0.8.23;");
}
