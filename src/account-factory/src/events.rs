use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event AccountCreation(address indexed account, address indexed implementation, uint256 indexed salt);
    #[derive(Debug, PartialEq, Eq)]
    event AccountCreationWithoutIndex(address indexed account, address indexed implementation);
}
