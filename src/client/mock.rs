//! In-memory [`ChainClient`] for tests: canned `eth_call` answers and a log
//! of everything the code under test asked for.

use crate::client::ChainClient;
use crate::core::{PreparedTx, SwapError, SwapResult, TxOutcome};
use crate::transaction::selector_of;
use ethers::abi::{self, Token};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Bytes, Signature, H256, U256};
use ethers::utils::{id, keccak256};
use std::collections::HashMap;
use std::sync::Mutex;

pub const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcab784d7bf4f2ff80";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Call { to: Address, selector: [u8; 4] },
    NativeBalance,
    Prepare { to: Address, selector: Option<[u8; 4]>, value: U256 },
    Send { to: Address, without_gas: bool },
    Sign,
    SendRaw { raw: Bytes },
}

pub struct MockClient {
    wallet: LocalWallet,
    chain_id: u64,
    native_balance: U256,
    responses: HashMap<(Address, [u8; 4]), Bytes>,
    events: Mutex<Vec<Event>>,
    prepared: Mutex<Vec<PreparedTx>>,
}

impl MockClient {
    pub fn new(chain_id: u64) -> Self {
        let wallet = TEST_KEY
            .parse::<LocalWallet>()
            .expect("valid test key")
            .with_chain_id(chain_id);
        Self {
            wallet,
            chain_id,
            native_balance: U256::zero(),
            responses: HashMap::new(),
            events: Mutex::new(Vec::new()),
            prepared: Mutex::new(Vec::new()),
        }
    }

    pub fn with_native_balance(mut self, balance: U256) -> Self {
        self.native_balance = balance;
        self
    }

    /// Answer calls of `signature` on `to` with the ABI encoding of `output`.
    pub fn respond(mut self, to: Address, signature: &str, output: &[Token]) -> Self {
        self.responses
            .insert((to, id(signature)), Bytes::from(abi::encode(output)));
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("events lock").clone()
    }

    pub fn prepared(&self) -> Vec<PreparedTx> {
        self.prepared.lock().expect("prepared lock").clone()
    }

    fn record(&self, event: Event) {
        self.events.lock().expect("events lock").push(event);
    }

    fn outcome(payload: &[u8]) -> TxOutcome {
        TxOutcome {
            hash: H256::from(keccak256(payload)),
            block_number: Some(1),
            gas_used: Some(U256::from(120_000u64)),
        }
    }
}

#[async_trait::async_trait]
impl ChainClient for MockClient {
    fn address(&self) -> Address {
        self.wallet.address()
    }

    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn call(&self, to: Address, data: Bytes) -> SwapResult<Bytes> {
        let selector = selector_of(&data).unwrap_or_default();
        self.record(Event::Call { to, selector });
        self.responses
            .get(&(to, selector))
            .cloned()
            .ok_or_else(|| SwapError::NetworkError(format!("no canned response for {:?}", to)))
    }

    async fn native_balance(&self) -> SwapResult<U256> {
        self.record(Event::NativeBalance);
        Ok(self.native_balance)
    }

    async fn prepare_tx(&self, to: Address, data: Bytes, value: U256) -> SwapResult<PreparedTx> {
        self.record(Event::Prepare {
            to,
            selector: selector_of(&data),
            value,
        });
        let tx = PreparedTx {
            from: self.address(),
            to,
            data,
            value,
            nonce: U256::from(7u64),
            gas: U256::from(500_000u64),
            max_fee_per_gas: U256::from(250_000_000u64),
            max_priority_fee_per_gas: U256::zero(),
            chain_id: self.chain_id,
        };
        self.prepared.lock().expect("prepared lock").push(tx.clone());
        Ok(tx)
    }

    async fn send_transaction(&self, tx: PreparedTx, without_gas: bool) -> SwapResult<TxOutcome> {
        self.record(Event::Send {
            to: tx.to,
            without_gas,
        });
        Ok(Self::outcome(&tx.data))
    }

    async fn sign_digest(&self, digest: H256) -> SwapResult<Signature> {
        self.record(Event::Sign);
        Ok(self.wallet.sign_hash(digest)?)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> SwapResult<TxOutcome> {
        let outcome = Self::outcome(&raw);
        self.record(Event::SendRaw { raw });
        Ok(outcome)
    }
}
