pub mod balances;
pub mod erc20;
pub mod evm;

#[cfg(test)]
pub mod mock;

use crate::core::{PreparedTx, SwapResult, TxOutcome};
use ethers::types::{Address, Bytes, Signature, H256, U256};

pub use balances::get_balance_tokens;
pub use erc20::{make_approve, Erc20};
pub use evm::EvmClient;

/// Account-bound access to a chain: reads, transaction preparation, signing
/// and submission.
#[async_trait::async_trait]
pub trait ChainClient: Send + Sync {
    /// Address of the signing account.
    fn address(&self) -> Address;

    fn chain_id(&self) -> u64;

    /// Read-only `eth_call` against `to`.
    async fn call(&self, to: Address, data: Bytes) -> SwapResult<Bytes>;

    async fn native_balance(&self) -> SwapResult<U256>;

    /// Fill nonce, EIP-1559 fees and a gas estimate for a call from the account.
    async fn prepare_tx(&self, to: Address, data: Bytes, value: U256) -> SwapResult<PreparedTx>;

    /// Sign and broadcast a prepared transaction, then wait for its receipt.
    /// With `without_gas` the prepared gas limit is used as is; otherwise gas
    /// is estimated again right before signing.
    async fn send_transaction(&self, tx: PreparedTx, without_gas: bool) -> SwapResult<TxOutcome>;

    /// Sign a 32-byte digest with the account key.
    async fn sign_digest(&self, digest: H256) -> SwapResult<Signature>;

    /// Broadcast an already signed payload, then wait for its receipt.
    async fn send_raw_transaction(&self, raw: Bytes) -> SwapResult<TxOutcome>;
}
