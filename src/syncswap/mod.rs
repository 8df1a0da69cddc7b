//! SyncSwap classic-pool swaps on zkSync Era, paid either in ETH or through
//! the SyncSwap paymaster in an ERC-20 gas token.

pub mod contracts;

pub use contracts::{build_swap_path, Paymaster, Pool, PoolFactory, Router};

use crate::client::{make_approve, ChainClient};
use crate::core::{
    constants::*, NetworkProfile, PreparedTx, SubmissionPath, SwapError, SwapReceipt,
    SwapRequest, SwapResult, TxOutcome,
};
use crate::transaction::{Eip712Transaction, PaymasterParams};
use ethers::types::{Address, U256};
use log::{debug, info};
use std::sync::Arc;

pub struct SyncSwap<C: ChainClient> {
    client: Arc<C>,
    network: NetworkProfile,
    factory: PoolFactory,
    router: Router,
    paymaster: Paymaster,
}

impl<C: ChainClient> SyncSwap<C> {
    /// Bind to the SyncSwap deployment of `network`.
    pub fn new(client: Arc<C>, network: NetworkProfile) -> SwapResult<Self> {
        let contracts = network.syncswap_contracts()?;
        Ok(Self {
            client,
            network,
            factory: PoolFactory(contracts.pool_factory),
            router: Router(contracts.router),
            paymaster: Paymaster(contracts.paymaster),
        })
    }

    pub fn network(&self) -> &NetworkProfile {
        &self.network
    }

    /// Quoted output of `pool` for `amount_in` of `token_in`, used as the
    /// minimum accepted output.
    pub async fn get_min_amount_out(
        &self,
        pool: Address,
        token_in: Address,
        amount_in: U256,
    ) -> SwapResult<U256> {
        Pool(pool)
            .get_amount_out(self.client.as_ref(), token_in, amount_in, self.client.address())
            .await
    }

    pub async fn swap(&self, request: &SwapRequest) -> SwapResult<SwapReceipt> {
        let from_address = self.network.token_address(&request.from_token)?;
        let to_address = self.network.token_address(&request.to_token)?;
        if from_address == to_address {
            return Err(SwapError::InvalidPair(
                request.from_token.clone(),
                request.to_token.clone(),
            ));
        }

        let pool = self
            .factory
            .get_pool(self.client.as_ref(), from_address, to_address)
            .await?;
        if pool == ZERO_ADDRESS {
            return Err(SwapError::PoolNotFound(
                request.from_token.clone(),
                request.to_token.clone(),
            ));
        }
        info!(
            "Pool {}/{}: {:?}",
            request.from_token, request.to_token, pool
        );

        let min_amount_out = self
            .get_min_amount_out(pool, from_address, request.amount_in)
            .await?;
        debug!("Minimum amount out: {}", min_amount_out);

        let native_in = self.network.is_native(&request.from_token);
        let value = if native_in {
            request.amount_in
        } else {
            U256::zero()
        };
        let deadline = deadline_from_now();

        let path = build_swap_path(
            pool,
            from_address,
            self.client.address(),
            request.amount_in,
            native_in,
        );

        let approval = if native_in {
            None
        } else {
            make_approve(
                self.client.as_ref(),
                from_address,
                self.router.0,
                request.amount_in,
            )
            .await?
        };

        let calldata = Router::swap_calldata(&[path], min_amount_out, deadline);
        let tx = self.client.prepare_tx(self.router.0, calldata, value).await?;

        let (outcome, submission) = if request.use_paymaster {
            let outcome = self.submit_with_paymaster(&tx, &request.gas_token).await?;
            (outcome, SubmissionPath::Paymaster)
        } else {
            info!("Submitting swap, gas paid in {}", self.network.native_symbol);
            let outcome = self.client.send_transaction(tx, true).await?;
            (outcome, SubmissionPath::Standard)
        };

        info!("Swap confirmed: {:?}", outcome.hash);
        Ok(SwapReceipt {
            outcome,
            submission,
            approval,
            pool,
            amount_in: request.amount_in,
            min_amount_out,
            deadline,
        })
    }

    async fn submit_with_paymaster(
        &self,
        tx: &PreparedTx,
        gas_token: &str,
    ) -> SwapResult<TxOutcome> {
        let gas_token_address = self.network.token_address(gas_token)?;
        info!("Submitting swap through paymaster, gas paid in {}", gas_token);

        let params = PaymasterParams {
            paymaster: self.paymaster.0,
            input: Paymaster::approval_based_input(
                gas_token_address,
                paymaster_min_allowance(),
                &PAYMASTER_INNER_INPUT,
            ),
        };
        let eip712 = Eip712Transaction::from_prepared(tx).with_paymaster(params);
        let signature = self.client.sign_digest(eip712.signing_hash()).await?;
        self.client
            .send_raw_transaction(eip712.encode_signed(&signature))
            .await
    }
}

fn deadline_from_now() -> U256 {
    let deadline = chrono::Utc::now().timestamp() + SWAP_DEADLINE_SECS;
    U256::from(u64::try_from(deadline).unwrap_or_default())
}
