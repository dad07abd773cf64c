use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event Deposited(address indexed account, uint256 totalDeposit);
    #[derive(Debug, PartialEq, Eq)]
    event Withdrawn(address indexed account, address withdrawAddress, uint256 amount);
    #[derive(Debug, PartialEq, Eq)]
    event AccountDeployed(bytes32 indexed userOpHash, address indexed sender, address factory, address paymaster);
    #[derive(Debug, PartialEq, Eq)]
    event UserOperationEvent(
        bytes32 indexed userOpHash,
        address indexed sender,
        address indexed paymaster,
        uint256 nonce,
        bool success,
        uint256 actualGasCost,
        uint256 actualGasUsed
    );
    #[derive(Debug, PartialEq, Eq)]
    event UserOperationRevertReason(bytes32 indexed userOpHash, address indexed sender, uint256 nonce, bytes revertReason);
}
