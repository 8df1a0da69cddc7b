use crate::client::ChainClient;
use crate::core::{constants::*, SwapPath, SwapResult, SwapStep};
use crate::transaction::{decode_address, decode_uint, encode_call};
use ethers::abi::{self, Token};
use ethers::types::{Address, Bytes, U256};

const GET_POOL: &str = "getPool(address,address)";
const GET_AMOUNT_OUT: &str = "getAmountOut(address,uint256,address)";
const ROUTER_SWAP: &str =
    "swap(((address,bytes,address,bytes,bool)[],address,uint256)[],uint256,uint256)";
const APPROVAL_BASED: &str = "approvalBased(address,uint256,bytes)";

/// SyncSwap pool factory (classic pools).
#[derive(Debug, Clone, Copy)]
pub struct PoolFactory(pub Address);

impl PoolFactory {
    /// Pool for the pair, or the zero address when none exists.
    pub async fn get_pool<C: ChainClient + ?Sized>(
        &self,
        client: &C,
        token_a: Address,
        token_b: Address,
    ) -> SwapResult<Address> {
        let data = client
            .call(
                self.0,
                encode_call(GET_POOL, &[Token::Address(token_a), Token::Address(token_b)]),
            )
            .await?;
        decode_address(&data, "getPool")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pool(pub Address);

impl Pool {
    pub async fn get_amount_out<C: ChainClient + ?Sized>(
        &self,
        client: &C,
        token_in: Address,
        amount_in: U256,
        sender: Address,
    ) -> SwapResult<U256> {
        let data = client
            .call(
                self.0,
                encode_call(
                    GET_AMOUNT_OUT,
                    &[
                        Token::Address(token_in),
                        Token::Uint(amount_in),
                        Token::Address(sender),
                    ],
                ),
            )
            .await?;
        decode_uint(&data, "getAmountOut")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Router(pub Address);

impl Router {
    pub fn swap_calldata(paths: &[SwapPath], amount_out_min: U256, deadline: U256) -> Bytes {
        let paths = paths.iter().map(path_token).collect();
        encode_call(
            ROUTER_SWAP,
            &[
                Token::Array(paths),
                Token::Uint(amount_out_min),
                Token::Uint(deadline),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paymaster(pub Address);

impl Paymaster {
    /// Input for the approval-based flow: gas is paid in `token`.
    pub fn approval_based_input(token: Address, min_allowance: U256, inner: &[u8]) -> Bytes {
        encode_call(
            APPROVAL_BASED,
            &[
                Token::Address(token),
                Token::Uint(min_allowance),
                Token::Bytes(inner.to_vec()),
            ],
        )
    }
}

/// Single-hop path through `pool`, unwrapping the output to the recipient.
///
/// `token_in` is the ERC-20 (or wrapped native) address the pool trades; the
/// path itself names the zero address when the input is sent as native value.
pub fn build_swap_path(
    pool: Address,
    token_in: Address,
    recipient: Address,
    amount_in: U256,
    native_in: bool,
) -> SwapPath {
    let data = abi::encode(&[
        Token::Address(token_in),
        Token::Address(recipient),
        Token::Uint(U256::from(WITHDRAW_MODE_UNWRAP)),
    ]);

    SwapPath {
        steps: vec![SwapStep {
            pool,
            data: Bytes::from(data),
            callback: ZERO_ADDRESS,
            callback_data: Bytes::new(),
            use_vault: true,
        }],
        token_in: if native_in { ZERO_ADDRESS } else { token_in },
        amount_in,
    }
}

fn path_token(path: &SwapPath) -> Token {
    let steps = path
        .steps
        .iter()
        .map(|step| {
            Token::Tuple(vec![
                Token::Address(step.pool),
                Token::Bytes(step.data.to_vec()),
                Token::Address(step.callback),
                Token::Bytes(step.callback_data.to_vec()),
                Token::Bool(step.use_vault),
            ])
        })
        .collect();

    Token::Tuple(vec![
        Token::Array(steps),
        Token::Address(path.token_in),
        Token::Uint(path.amount_in),
    ])
}
