//! Solidity ABI surfaces of the account system and its collaborators.
//!
//! The contracts decode their calldata against these definitions and the off-chain tooling
//! encodes against them, so both sides agree on selectors and layouts.

use alloy_sol_types::sol;

sol! {
    /// ERC-4337 (v0.6) user operation as submitted to the entry point.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct UserOperation {
        address sender;
        uint256 nonce;
        bytes initCode;
        bytes callData;
        uint256 callGasLimit;
        uint256 verificationGasLimit;
        uint256 preVerificationGas;
        uint256 maxFeePerGas;
        uint256 maxPriorityFeePerGas;
        bytes paymasterAndData;
        bytes signature;
    }

    /// The trusted dispatcher.
    interface IEntryPoint {
        function depositTo(address account) external payable;
        function balanceOf(address account) external view returns (uint256);
        function withdrawTo(address withdrawAddress, uint256 withdrawAmount) external;
        function getNonce(address sender, uint192 key) external view returns (uint256 nonce);
        function getUserOpHash(UserOperation calldata userOp) external view returns (bytes32);
        function handleOps(UserOperation[] calldata ops, address beneficiary) external;
    }

    /// Account surface reserved to the entry point (and, for some functions, the account itself).
    interface ISmartAccount {
        function init(address setupContract, bytes calldata setupData) external returns (address);
        function execute(address dest, uint256 value, bytes calldata func) external;
        function executeBatch(address[] calldata dest, uint256[] calldata value, bytes[] calldata func) external;
        function validateUserOp(UserOperation calldata userOp, bytes32 userOpHash, uint256 missingAccountFunds)
            external
            returns (uint256 validationData);
        function addDeposit() external payable;
        function getDeposit() external view returns (uint256);
        function withdrawDepositTo(address withdrawAddress, uint256 amount) external;
        function nonce(uint192 key) external view returns (uint256);
        function entryPoint() external view returns (address);
        function version() external pure returns (string memory);
        function isInitialized() external view returns (bool);
    }

    /// Module registry and module-initiated execution.
    interface IModuleManager {
        function enableModule(address module) external;
        function disableModule(address prevModule, address module) external;
        function setupAndEnableModule(address setupContract, bytes calldata setupData) external returns (address);
        function isModuleEnabled(address module) external view returns (bool);
        function getModulesPaginated(address start, uint256 pageSize)
            external
            view
            returns (address[] memory array, address next);
        function execTransactionFromModule(address to, uint256 value, bytes calldata data, uint8 operation, uint256 txGas)
            external
            returns (bool success);
        function execTransactionFromModuleReturnData(address to, uint256 value, bytes calldata data, uint8 operation)
            external
            returns (bool success, bytes memory returnData);
        function execBatchTransactionFromModule(
            address[] calldata to,
            uint256[] calldata value,
            bytes[] calldata data,
            uint8[] calldata operations
        ) external returns (bool success);
    }

    /// Authorization module binding each account to one EOA owner.
    interface IEcdsaOwnershipModule {
        function init(address eoaOwner) external returns (address);
        function transferOwnership(address owner) external;
        function renounceOwnership() external;
        function getOwner(address smartAccount) external view returns (address);
        function validateUserOp(UserOperation calldata userOp, bytes32 userOpHash) external view returns (uint256);
        function isValidSignature(bytes32 dataHash, bytes memory moduleSignature) external view returns (bytes4);
        function isValidSignatureForAddress(bytes32 dataHash, bytes memory moduleSignature, address smartAccount)
            external
            view
            returns (bytes4);
        function name() external pure returns (string memory);
        function version() external pure returns (string memory);
    }

    /// Deterministic deployment of account proxies.
    interface ISmartAccountFactory {
        function basicImplementation() external view returns (address);
        function getBytecode() external view returns (bytes memory);
        function accountCreationCode() external view returns (bytes memory);
        function getProxyAddress(uint256 salt) external view returns (address);
        function deploySmartAccount(uint256 salt, address initialTarget, bytes calldata initData)
            external
            returns (address proxy);
        function deployAccount(address initialTarget, bytes calldata initData) external returns (address proxy);
    }

    /// Fungible balance ledger moved through `execute`/`executeBatch`.
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
        function mint(address to, uint256 amount) external;
    }
}
