use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event OwnershipTransferred(address indexed smartAccount, address indexed oldOwner, address indexed newOwner);
}
