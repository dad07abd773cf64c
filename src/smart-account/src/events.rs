//! Events emitted by the account and its module registry.

use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event EnabledModule(address module);
    #[derive(Debug, PartialEq, Eq)]
    event DisabledModule(address module);
    #[derive(Debug, PartialEq, Eq)]
    event ExecutionSuccess(
        address indexed to,
        uint256 indexed value,
        bytes indexed data,
        uint8 operation,
        uint256 txGas
    );
    #[derive(Debug, PartialEq, Eq)]
    event ExecutionFailure(
        address indexed to,
        uint256 indexed value,
        bytes indexed data,
        uint8 operation,
        uint256 txGas
    );
    #[derive(Debug, PartialEq, Eq)]
    event ExecutionFromModuleSuccess(address indexed module);
    #[derive(Debug, PartialEq, Eq)]
    event ExecutionFromModuleFailure(address indexed module);

    #[derive(Debug, PartialEq, Eq)]
    event SmartAccountReceivedNativeToken(address indexed sender, uint256 indexed value);
}
