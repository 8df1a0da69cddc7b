use ethers::abi::Error as AbiError;
use ethers::providers::ProviderError;
use ethers::signers::WalletError;
use ethers::types::{H256, U256};
use thiserror::Error;

pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Pool does not exist for pair {0}/{1}")]
    PoolNotFound(String, String),

    #[error("Token {0} is not configured for network {1}")]
    TokenNotFound(String, String),

    #[error("Cannot swap {0} into {1}: both resolve to the same token")]
    InvalidPair(String, String),

    #[error("Zero balance for {0}")]
    ZeroBalance(String),

    #[error("Network {0} has no SyncSwap deployment")]
    UnsupportedNetwork(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("RPC serves chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("RPC error: {0}")]
    Rpc(#[from] ProviderError),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    #[error("Failed to decode {0} response")]
    Decode(&'static str),

    #[error("Transaction {0:?} reverted")]
    TransactionReverted(H256),

    #[error("Transaction {0:?} dropped from mempool")]
    TransactionDropped(H256),

    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        SwapError::NetworkError(err.to_string())
    }
}

/// Recoverable user-input errors; the prompter logs them and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Selection {0} is out of range 1..={1}")]
    OutOfRange(usize, usize),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Amount {requested} exceeds balance {available}")]
    ExceedsBalance { requested: U256, available: U256 },
}
