use crate::client::ChainClient;
use crate::core::{Config, NetworkProfile, PreparedTx, SwapError, SwapResult, TxOutcome};
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{
    Address, BlockId, BlockNumber, Bytes, Eip1559TransactionRequest, Signature, H256, U256, U64,
};
use log::{debug, info};

/// [`ChainClient`] backed by a JSON-RPC provider and a local private key.
pub struct EvmClient {
    provider: Provider<Http>,
    wallet: LocalWallet,
    confirmations: usize,
}

impl EvmClient {
    /// Connect to the RPC for `network` and check it serves the expected chain.
    pub async fn connect(
        config: &Config,
        network: &NetworkProfile,
        private_key: &str,
    ) -> SwapResult<Self> {
        let wallet = parse_wallet(private_key, network.chain_id)?;
        let rpc_url = config.rpc_url_for(network);
        let provider = build_provider(&rpc_url, config.proxy.as_deref())?;

        let actual = provider.get_chainid().await?.as_u64();
        if actual != network.chain_id {
            return Err(SwapError::ChainMismatch {
                expected: network.chain_id,
                actual,
            });
        }

        info!(
            "Connected to {} (chain {}) as {:?}",
            network.name,
            actual,
            wallet.address()
        );

        Ok(Self {
            provider,
            wallet,
            confirmations: config.confirmations,
        })
    }

    fn request(&self, tx: &PreparedTx) -> TypedTransaction {
        Eip1559TransactionRequest::new()
            .from(tx.from)
            .to(tx.to)
            .data(tx.data.clone())
            .value(tx.value)
            .nonce(tx.nonce)
            .gas(tx.gas)
            .max_fee_per_gas(tx.max_fee_per_gas)
            .max_priority_fee_per_gas(tx.max_priority_fee_per_gas)
            .chain_id(tx.chain_id)
            .into()
    }

    async fn broadcast(&self, raw: Bytes) -> SwapResult<TxOutcome> {
        let pending = self.provider.send_raw_transaction(raw).await?;
        let hash = pending.tx_hash();
        info!(
            "Submitted {:?}, waiting for {} confirmation(s)",
            hash, self.confirmations
        );

        let receipt = pending
            .confirmations(self.confirmations)
            .await?
            .ok_or(SwapError::TransactionDropped(hash))?;
        if receipt.status != Some(U64::from(1u64)) {
            return Err(SwapError::TransactionReverted(hash));
        }

        Ok(TxOutcome {
            hash,
            block_number: receipt.block_number.map(|n| n.as_u64()),
            gas_used: receipt.gas_used,
        })
    }
}

/// HTTP transport, optionally routed through an HTTP(S) or SOCKS5 proxy.
pub fn build_provider(rpc_url: &str, proxy: Option<&str>) -> SwapResult<Provider<Http>> {
    let url = reqwest::Url::parse(rpc_url)
        .map_err(|e| SwapError::ConfigError(format!("invalid RPC URL {}: {}", rpc_url, e)))?;

    let mut builder = reqwest::Client::builder();
    if let Some(proxy) = proxy {
        debug!("Routing RPC traffic through {}", proxy);
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(Provider::new(Http::new_with_client(url, builder.build()?)))
}

/// Parse a hex private key, with or without `0x`, bound to `chain_id`.
pub fn parse_wallet(private_key: &str, chain_id: u64) -> SwapResult<LocalWallet> {
    let key = private_key.trim();
    let key = key.strip_prefix("0x").unwrap_or(key);
    Ok(key.parse::<LocalWallet>()?.with_chain_id(chain_id))
}

#[async_trait::async_trait]
impl ChainClient for EvmClient {
    fn address(&self) -> Address {
        self.wallet.address()
    }

    fn chain_id(&self) -> u64 {
        self.wallet.chain_id()
    }

    async fn call(&self, to: Address, data: Bytes) -> SwapResult<Bytes> {
        let request: TypedTransaction = Eip1559TransactionRequest::new()
            .from(self.address())
            .to(to)
            .data(data)
            .into();
        Ok(self.provider.call(&request, None).await?)
    }

    async fn native_balance(&self) -> SwapResult<U256> {
        Ok(self.provider.get_balance(self.address(), None).await?)
    }

    async fn prepare_tx(&self, to: Address, data: Bytes, value: U256) -> SwapResult<PreparedTx> {
        let from = self.address();
        let nonce = self
            .provider
            .get_transaction_count(from, Some(BlockId::Number(BlockNumber::Pending)))
            .await?;
        let (max_fee_per_gas, max_priority_fee_per_gas) =
            self.provider.estimate_eip1559_fees(None).await?;

        let mut tx = PreparedTx {
            from,
            to,
            data,
            value,
            nonce,
            gas: U256::zero(),
            max_fee_per_gas,
            max_priority_fee_per_gas,
            chain_id: self.chain_id(),
        };
        tx.gas = self.provider.estimate_gas(&self.request(&tx), None).await?;

        debug!(
            "Prepared tx to {:?}: nonce {}, gas {}, maxFee {}",
            to, tx.nonce, tx.gas, tx.max_fee_per_gas
        );
        Ok(tx)
    }

    async fn send_transaction(&self, tx: PreparedTx, without_gas: bool) -> SwapResult<TxOutcome> {
        let mut request = self.request(&tx);
        if !without_gas {
            let gas = self.provider.estimate_gas(&request, None).await?;
            request.set_gas(gas);
        }

        let signature = self.wallet.sign_transaction(&request).await?;
        self.broadcast(request.rlp_signed(&signature)).await
    }

    async fn sign_digest(&self, digest: H256) -> SwapResult<Signature> {
        Ok(self.wallet.sign_hash(digest)?)
    }

    async fn send_raw_transaction(&self, raw: Bytes) -> SwapResult<TxOutcome> {
        self.broadcast(raw).await
    }
}
