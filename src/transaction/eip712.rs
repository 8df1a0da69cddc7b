//! zkSync Era EIP-712 transactions (type `0x71`).
//!
//! These carry paymaster parameters, which plain EIP-1559 envelopes cannot.
//! The signature covers the EIP-712 digest of the `Transaction` struct below
//! under the `zkSync`/`2` domain; the payload is `0x71 || rlp(fields)`.

use crate::core::{constants::*, PreparedTx};
use ethers::abi::{self, Token};
use ethers::types::{Address, Bytes, Signature, H256, U256};
use ethers::utils::keccak256;
use ethers::utils::rlp::RlpStream;

const EIP712_DOMAIN_TYPE: &str = "EIP712Domain(string name,string version,uint256 chainId)";

const TRANSACTION_TYPE: &str = "Transaction(uint256 txType,uint256 from,uint256 to,\
uint256 gasLimit,uint256 gasPerPubdataByteLimit,uint256 maxFeePerGas,\
uint256 maxPriorityFeePerGas,uint256 paymaster,uint256 nonce,uint256 value,\
bytes data,bytes32[] factoryDeps,bytes paymasterInput)";

/// Paymaster address plus the flow-specific input it validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymasterParams {
    pub paymaster: Address,
    pub input: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip712Transaction {
    pub chain_id: u64,
    pub nonce: U256,
    pub from: Address,
    pub to: Address,
    pub gas_limit: U256,
    pub gas_per_pubdata: U256,
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
    pub value: U256,
    pub data: Bytes,
    pub paymaster_params: Option<PaymasterParams>,
}

impl Eip712Transaction {
    /// Re-wrap an already prepared transaction, keeping nonce, gas and fees.
    pub fn from_prepared(tx: &PreparedTx) -> Self {
        Self {
            chain_id: tx.chain_id,
            nonce: tx.nonce,
            from: tx.from,
            to: tx.to,
            gas_limit: tx.gas,
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            max_fee_per_gas: tx.max_fee_per_gas,
            max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
            value: tx.value,
            data: tx.data.clone(),
            paymaster_params: None,
        }
    }

    pub fn with_paymaster(mut self, params: PaymasterParams) -> Self {
        self.paymaster_params = Some(params);
        self
    }

    fn domain_separator(&self) -> [u8; 32] {
        keccak256(abi::encode(&[
            Token::FixedBytes(keccak256(EIP712_DOMAIN_TYPE).to_vec()),
            Token::FixedBytes(keccak256(EIP712_DOMAIN_NAME).to_vec()),
            Token::FixedBytes(keccak256(EIP712_DOMAIN_VERSION).to_vec()),
            Token::Uint(U256::from(self.chain_id)),
        ]))
    }

    fn struct_hash(&self) -> [u8; 32] {
        let (paymaster, paymaster_input) = match &self.paymaster_params {
            Some(params) => (params.paymaster, params.input.to_vec()),
            None => (ZERO_ADDRESS, Vec::new()),
        };

        keccak256(abi::encode(&[
            Token::FixedBytes(keccak256(TRANSACTION_TYPE).to_vec()),
            Token::Uint(U256::from(EIP712_TX_TYPE)),
            Token::Address(self.from),
            Token::Address(self.to),
            Token::Uint(self.gas_limit),
            Token::Uint(self.gas_per_pubdata),
            Token::Uint(self.max_fee_per_gas),
            Token::Uint(self.max_priority_fee_per_gas),
            Token::Address(paymaster),
            Token::Uint(self.nonce),
            Token::Uint(self.value),
            Token::FixedBytes(keccak256(&self.data).to_vec()),
            // Swaps never deploy contracts, so factoryDeps is always empty.
            Token::FixedBytes(keccak256([0u8; 0]).to_vec()),
            Token::FixedBytes(keccak256(paymaster_input).to_vec()),
        ]))
    }

    /// EIP-712 digest the account key signs.
    pub fn signing_hash(&self) -> H256 {
        let mut message = Vec::with_capacity(66);
        message.extend_from_slice(&[0x19, 0x01]);
        message.extend_from_slice(&self.domain_separator());
        message.extend_from_slice(&self.struct_hash());
        H256::from(keccak256(message))
    }

    /// Serialize with `signature` into a raw payload for `eth_sendRawTransaction`.
    pub fn encode_signed(&self, signature: &Signature) -> Bytes {
        let y_parity = if signature.v >= 27 {
            signature.v - 27
        } else {
            signature.v
        };

        let mut rlp = RlpStream::new();
        rlp.begin_list(16);
        rlp.append(&self.nonce);
        rlp.append(&self.max_priority_fee_per_gas);
        rlp.append(&self.max_fee_per_gas);
        rlp.append(&self.gas_limit);
        rlp.append(&self.to);
        rlp.append(&self.value);
        rlp.append(&self.data.as_ref());
        rlp.append(&y_parity);
        rlp.append(&signature.r);
        rlp.append(&signature.s);
        rlp.append(&self.chain_id);
        rlp.append(&self.from);
        rlp.append(&self.gas_per_pubdata);
        rlp.begin_list(0);
        rlp.append(&signature.to_vec());
        match &self.paymaster_params {
            Some(params) => {
                rlp.begin_list(2);
                rlp.append(&params.paymaster);
                rlp.append(&params.input.as_ref());
            }
            None => {
                rlp.begin_list(0);
            }
        }

        let mut raw = vec![EIP712_TX_TYPE];
        raw.extend_from_slice(&rlp.out());
        Bytes::from(raw)
    }
}
