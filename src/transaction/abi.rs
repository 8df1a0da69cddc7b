use crate::core::{SwapError, SwapResult};
use ethers::abi::{self, ParamType, Token};
use ethers::types::{Address, Bytes, U256};
use ethers::utils::id;

/// Selector followed by the ABI-encoded arguments.
pub fn encode_call(signature: &str, args: &[Token]) -> Bytes {
    let mut data = id(signature).to_vec();
    data.extend_from_slice(&abi::encode(args));
    Bytes::from(data)
}

/// First four bytes of calldata, if present.
pub fn selector_of(data: &[u8]) -> Option<[u8; 4]> {
    data.get(..4).map(|s| [s[0], s[1], s[2], s[3]])
}

pub fn decode_address(data: &[u8], what: &'static str) -> SwapResult<Address> {
    abi::decode(&[ParamType::Address], data)?
        .into_iter()
        .next()
        .and_then(Token::into_address)
        .ok_or(SwapError::Decode(what))
}

pub fn decode_uint(data: &[u8], what: &'static str) -> SwapResult<U256> {
    abi::decode(&[ParamType::Uint(256)], data)?
        .into_iter()
        .next()
        .and_then(Token::into_uint)
        .ok_or(SwapError::Decode(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_selectors() {
        let spender = Address::repeat_byte(0xaa);
        let approve = encode_call(
            "approve(address,uint256)",
            &[Token::Address(spender), Token::Uint(U256::MAX)],
        );
        assert_eq!(selector_of(&approve), Some([0x09, 0x5e, 0xa7, 0xb3]));
        assert_eq!(approve.len(), 4 + 64);

        let balance = encode_call("balanceOf(address)", &[Token::Address(spender)]);
        assert_eq!(selector_of(&balance), Some([0x70, 0xa0, 0x82, 0x31]));

        let decimals = encode_call("decimals()", &[]);
        assert_eq!(decimals.to_vec(), vec![0x31, 0x3c, 0xe5, 0x67]);
    }

    #[test]
    fn test_decode_single_words() {
        let pool = Address::repeat_byte(0x42);
        let encoded = abi::encode(&[Token::Address(pool)]);
        assert_eq!(decode_address(&encoded, "getPool").unwrap(), pool);

        let encoded = abi::encode(&[Token::Uint(U256::from(997u64))]);
        assert_eq!(decode_uint(&encoded, "getAmountOut").unwrap(), U256::from(997u64));
    }

    #[test]
    fn test_decode_short_response_fails() {
        assert!(decode_uint(&[0u8; 3], "balanceOf").is_err());
        assert_eq!(selector_of(&[1, 2]), None);
    }
}
