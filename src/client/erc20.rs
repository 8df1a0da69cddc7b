use crate::client::ChainClient;
use crate::core::{SwapError, SwapResult, TxOutcome};
use crate::transaction::{decode_uint, encode_call};
use ethers::abi::Token;
use ethers::types::{Address, Bytes, U256};
use log::info;

/// Minimal ERC-20 handle: reads go through [`ChainClient::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Erc20 {
    address: Address,
}

impl Erc20 {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn decimals<C: ChainClient + ?Sized>(&self, client: &C) -> SwapResult<u8> {
        let data = client
            .call(self.address, encode_call("decimals()", &[]))
            .await?;
        let decimals = decode_uint(&data, "decimals")?;
        u8::try_from(decimals.low_u64())
            .ok()
            .filter(|_| decimals <= U256::from(u8::MAX))
            .ok_or(SwapError::Decode("decimals"))
    }

    pub async fn balance_of<C: ChainClient + ?Sized>(
        &self,
        client: &C,
        owner: Address,
    ) -> SwapResult<U256> {
        let data = client
            .call(
                self.address,
                encode_call("balanceOf(address)", &[Token::Address(owner)]),
            )
            .await?;
        decode_uint(&data, "balanceOf")
    }

    pub async fn allowance<C: ChainClient + ?Sized>(
        &self,
        client: &C,
        owner: Address,
        spender: Address,
    ) -> SwapResult<U256> {
        let data = client
            .call(
                self.address,
                encode_call(
                    "allowance(address,address)",
                    &[Token::Address(owner), Token::Address(spender)],
                ),
            )
            .await?;
        decode_uint(&data, "allowance")
    }

    pub fn approve_calldata(spender: Address, amount: U256) -> Bytes {
        encode_call(
            "approve(address,uint256)",
            &[Token::Address(spender), Token::Uint(amount)],
        )
    }
}

/// Grant `spender` an allowance of `amount` unless it already has one.
///
/// Returns once the approval is mined; `None` means no transaction was needed.
pub async fn make_approve<C: ChainClient + ?Sized>(
    client: &C,
    token: Address,
    spender: Address,
    amount: U256,
) -> SwapResult<Option<TxOutcome>> {
    let erc20 = Erc20::new(token);
    let current = erc20.allowance(client, client.address(), spender).await?;
    if current >= amount {
        info!(
            "Allowance {} of {:?} for {:?} already covers {}",
            current, token, spender, amount
        );
        return Ok(None);
    }

    info!("Approving {} of {:?} for {:?}", amount, token, spender);
    let tx = client
        .prepare_tx(token, Erc20::approve_calldata(spender, amount), U256::zero())
        .await?;
    let outcome = client.send_transaction(tx, true).await?;
    info!("Approval confirmed: {:?}", outcome.hash);
    Ok(Some(outcome))
}
