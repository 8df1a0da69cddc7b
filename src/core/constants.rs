use ethers::types::{Address, H160, U256};

// Network names
pub const NETWORK_ARBITRUM: &str = "Arbitrum";
pub const NETWORK_OPTIMISM: &str = "Optimism";
pub const NETWORK_ETHEREUM: &str = "Ethereum";
pub const NETWORK_ZKSYNC: &str = "zkSync";

pub const DEFAULT_NETWORK: &str = NETWORK_ZKSYNC;

// Native currency symbol on every supported network
pub const NATIVE_SYMBOL: &str = "ETH";
pub const NATIVE_DECIMALS: u8 = 18;

pub const ZERO_ADDRESS: Address = H160([0u8; 20]);

// Swap configuration
pub const SWAP_DEADLINE_SECS: i64 = 1200; // 20 minutes
/// SyncSwap withdraw mode: 1 unwraps wETH to ETH for the recipient.
pub const WITHDRAW_MODE_UNWRAP: u8 = 1;

// Paymaster configuration
pub const PAYMASTER_MIN_ALLOWANCE: u64 = 2_000_000_000;
pub const PAYMASTER_INNER_INPUT: [u8; 32] = {
    let mut input = [0u8; 32];
    input[31] = 0x0f;
    input
};

// zkSync EIP-712 transaction
pub const EIP712_TX_TYPE: u8 = 0x71;
pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;
pub const EIP712_DOMAIN_NAME: &str = "zkSync";
pub const EIP712_DOMAIN_VERSION: &str = "2";

// Display configuration
pub const BALANCE_DISPLAY_PRECISION: usize = 6;

// Runtime defaults
pub const DEFAULT_LOG_FILE: &str = "syncswapper.log";
pub const DEFAULT_CONFIRMATIONS: usize = 1;

pub fn paymaster_min_allowance() -> U256 {
    U256::from(PAYMASTER_MIN_ALLOWANCE)
}
