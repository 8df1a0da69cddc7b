use ethers::types::{Address, Bytes, H256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u8,
    pub address: Address,
    /// Balance in the token's smallest unit.
    pub balance: U256,
    /// Amount the user chose to swap, in smallest unit.
    pub chosen_amount: Option<U256>,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, decimals: u8, address: Address, balance: U256) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            address,
            balance,
            chosen_amount: None,
        }
    }
}

/// Wallet balances in network table order; selection indices follow this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBalances {
    tokens: Vec<TokenInfo>,
}

impl TokenBalances {
    pub fn new(tokens: Vec<TokenInfo>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenInfo> {
        self.tokens.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TokenInfo> {
        self.tokens.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TokenInfo> {
        self.tokens.get_mut(index)
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&TokenInfo> {
        self.tokens.iter().find(|token| token.symbol == symbol)
    }
}

impl Index<usize> for TokenBalances {
    type Output = TokenInfo;

    fn index(&self, index: usize) -> &TokenInfo {
        &self.tokens[index]
    }
}

impl IndexMut<usize> for TokenBalances {
    fn index_mut(&mut self, index: usize) -> &mut TokenInfo {
        &mut self.tokens[index]
    }
}

/// One hop through a SyncSwap pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapStep {
    pub pool: Address,
    pub data: Bytes,
    pub callback: Address,
    pub callback_data: Bytes,
    pub use_vault: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPath {
    pub steps: Vec<SwapStep>,
    pub token_in: Address,
    pub amount_in: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub from_token: String,
    pub to_token: String,
    pub gas_token: String,
    pub amount_in: U256,
    pub use_paymaster: bool,
}

/// Fully populated EIP-1559 transaction, ready for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTx {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
    pub nonce: U256,
    pub gas: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutcome {
    pub hash: H256,
    pub block_number: Option<u64>,
    pub gas_used: Option<U256>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionPath {
    Standard,
    Paymaster,
}

impl fmt::Display for SubmissionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionPath::Standard => write!(f, "standard"),
            SubmissionPath::Paymaster => write!(f, "paymaster"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub outcome: TxOutcome,
    pub submission: SubmissionPath,
    pub approval: Option<TxOutcome>,
    pub pool: Address,
    pub amount_in: U256,
    pub min_amount_out: U256,
    pub deadline: U256,
}
