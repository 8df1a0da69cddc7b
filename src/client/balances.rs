use crate::client::{ChainClient, Erc20};
use crate::core::{
    constants::{BALANCE_DISPLAY_PRECISION, NATIVE_DECIMALS},
    NetworkProfile, SwapResult, TokenBalances, TokenInfo,
};
use crate::utils::format_units;
use log::{debug, info};

/// Read the wallet's balance of every token configured for `network`.
///
/// The native symbol is read with `eth_getBalance`; everything else through
/// the token contract's `decimals()` and `balanceOf()`. Any failed read aborts
/// the whole fetch.
pub async fn get_balance_tokens<C: ChainClient + ?Sized>(
    client: &C,
    network: &NetworkProfile,
) -> SwapResult<TokenBalances> {
    let owner = client.address();
    let mut tokens = Vec::with_capacity(network.tokens.len());

    for (symbol, address) in &network.tokens {
        let (decimals, balance) = if network.is_native(symbol) {
            (NATIVE_DECIMALS, client.native_balance().await?)
        } else {
            let erc20 = Erc20::new(*address);
            let decimals = erc20.decimals(client).await?;
            (decimals, erc20.balance_of(client, owner).await?)
        };

        debug!("{} {:?}: {} raw, {} decimals", symbol, address, balance, decimals);
        tokens.push(TokenInfo::new(symbol.clone(), decimals, *address, balance));
    }

    for token in &tokens {
        info!(
            "{}: {}",
            token.symbol,
            format_units(token.balance, token.decimals, BALANCE_DISPLAY_PRECISION)
        );
    }

    Ok(TokenBalances::new(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{Event, MockClient};
    use crate::core::SwapError;
    use ethers::abi::Token;
    use ethers::types::{Address, U256};
    use pretty_assertions::assert_eq;

    fn network() -> NetworkProfile {
        let mut profile = NetworkProfile::load("zkSync").unwrap();
        profile.tokens = vec![
            ("ETH".to_string(), Address::repeat_byte(0x01)),
            ("USDC".to_string(), Address::repeat_byte(0x02)),
        ];
        profile
    }

    #[test]
    fn test_native_and_erc20_balances() {
        let usdc = Address::repeat_byte(0x02);
        let client = MockClient::new(324)
            .with_native_balance(U256::from(10u64).pow(U256::from(18u64)))
            .respond(usdc, "decimals()", &[Token::Uint(U256::from(6u64))])
            .respond(usdc, "balanceOf(address)", &[Token::Uint(U256::from(5_000_000u64))]);

        let balances = tokio_test::block_on(get_balance_tokens(&client, &network())).unwrap();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].symbol, "ETH");
        assert_eq!(balances[0].decimals, 18);
        assert_eq!(balances[0].balance, U256::from(10u64).pow(U256::from(18u64)));
        assert_eq!(balances[1].symbol, "USDC");
        assert_eq!(balances[1].decimals, 6);
        assert_eq!(balances[1].balance, U256::from(5_000_000u64));
        assert_eq!(balances[1].chosen_amount, None);

        // The native entry never touches its table address.
        assert!(!client
            .events()
            .iter()
            .any(|e| matches!(e, Event::Call { to, .. } if *to == Address::repeat_byte(0x01))));
    }

    #[tokio::test]
    async fn test_failed_read_aborts() {
        let client = MockClient::new(324);
        let result = get_balance_tokens(&client, &network()).await;
        assert!(matches!(result, Err(SwapError::NetworkError(_))));
    }
}
