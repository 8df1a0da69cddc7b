use crate::cli::{display::SwapDisplay, SwapArgs};
use crate::client::ChainClient;
use crate::core::{Config, NetworkProfile, SwapError, SwapReceipt, SwapRequest, SwapResult};
use crate::selection::{ChoiceOptions, DialoguerPrompt, Prompt, TokenSelector};
use crate::syncswap::SyncSwap;
use colored::*;
use log::{info, warn};
use std::sync::Arc;

pub async fn execute(config: Config, args: SwapArgs) -> SwapResult<()> {
    let network = config.network_profile()?;
    // Fail before asking for a key on networks without a deployment.
    network.syncswap_contracts()?;
    SwapDisplay::display_banner(&network);

    let mut selector = TokenSelector::new(DialoguerPrompt::new());
    let client = Arc::new(super::connect(&config, &network, selector.prompt_mut()).await?);
    SwapDisplay::display_wallet(&client.address());

    match run_swap(
        client,
        network.clone(),
        config.use_paymaster,
        args.yes,
        &mut selector,
    )
    .await?
    {
        Some(receipt) => SwapDisplay::display_swap_result(&receipt, &network),
        None => println!("{}", "❌ Swap cancelled".yellow()),
    }

    Ok(())
}

/// Balances, the three token choices, confirmation and the swap itself.
///
/// Returns `None` when the user declines the confirmation prompt.
pub async fn run_swap<C: ChainClient, P: Prompt>(
    client: Arc<C>,
    network: NetworkProfile,
    use_paymaster: bool,
    skip_confirmation: bool,
    selector: &mut TokenSelector<P>,
) -> SwapResult<Option<SwapReceipt>> {
    let syncswap = SyncSwap::new(client.clone(), network.clone())?;
    let mut balances = super::fetch_balances(client.as_ref(), &network).await?;

    selector.prompt_mut().show("Token to swap from:");
    let from = selector.choose_token(&mut balances, ChoiceOptions::SOURCE)?;
    selector.prompt_mut().show("Token to receive:");
    let to = selector.choose_token(&mut balances, ChoiceOptions::DESTINATION)?;

    let gas_token = if use_paymaster {
        selector.prompt_mut().show("Token to pay gas with:");
        selector
            .choose_token(&mut balances, ChoiceOptions::GAS)?
            .symbol
    } else {
        network.native_symbol.clone()
    };

    let amount_in = from
        .chosen_amount
        .ok_or_else(|| SwapError::ConfigError(format!("no amount chosen for {}", from.symbol)))?;

    let request = SwapRequest {
        from_token: from.symbol.clone(),
        to_token: to.symbol.clone(),
        gas_token,
        amount_in,
        use_paymaster,
    };
    info!(
        "Swap {} -> {}, gas in {}",
        request.from_token, request.to_token, request.gas_token
    );
    SwapDisplay::display_swap_summary(&request, &from, &network);

    if !skip_confirmation && !selector.prompt_mut().confirm("Proceed with this swap?")? {
        warn!("Swap cancelled by user");
        return Ok(None);
    }

    let pb = SwapDisplay::create_progress_bar("Swapping...");
    let result = syncswap.swap(&request).await;
    pb.finish_and_clear();
    Ok(Some(result?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{Event, MockClient};
    use crate::core::{SubmissionPath, SyncSwapContracts};
    use crate::selection::prompt::testing::ScriptedPrompt;
    use ethers::abi::Token;
    use ethers::types::{Address, U256};
    use pretty_assertions::assert_eq;

    const POOL: Address = ethers::types::H160([0x99; 20]);

    fn contracts() -> SyncSwapContracts {
        SyncSwapContracts {
            pool_factory: Address::repeat_byte(0xfa),
            router: Address::repeat_byte(0xab),
            paymaster: Address::repeat_byte(0xbb),
        }
    }

    fn network() -> NetworkProfile {
        NetworkProfile::load("zkSync").unwrap().with_syncswap(contracts())
    }

    /// zkSync table: ETH, WETH, USDT (empty), USDC.e, USDC.
    fn client(network: &NetworkProfile) -> MockClient {
        let mut client = MockClient::new(network.chain_id)
            .with_native_balance(U256::from(2_000_000_000_000_000_000u128))
            .respond(
                contracts().pool_factory,
                "getPool(address,address)",
                &[Token::Address(POOL)],
            )
            .respond(
                POOL,
                "getAmountOut(address,uint256,address)",
                &[Token::Uint(U256::from(1_000_000u64))],
            );

        for (symbol, decimals, balance) in [
            ("WETH", 18u64, 0u64),
            ("USDT", 6, 0),
            ("USDC.e", 6, 3_000_000),
            ("USDC", 6, 7_000_000),
        ] {
            let address = network.token_address(symbol).unwrap();
            client = client
                .respond(address, "decimals()", &[Token::Uint(U256::from(decimals))])
                .respond(
                    address,
                    "balanceOf(address)",
                    &[Token::Uint(U256::from(balance))],
                )
                .respond(
                    address,
                    "allowance(address,address)",
                    &[Token::Uint(U256::zero())],
                );
        }
        client
    }

    #[tokio::test]
    async fn test_eth_to_usdc_through_paymaster() {
        let network = network();
        let client = Arc::new(client(&network));
        let mut selector = TokenSelector::new(ScriptedPrompt::new(&["1", "0.5", "5", "5", "y"]));

        let receipt = run_swap(client.clone(), network, true, false, &mut selector)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(receipt.submission, SubmissionPath::Paymaster);
        assert_eq!(receipt.amount_in, U256::from(500_000_000_000_000_000u128));
        assert_eq!(receipt.pool, POOL);

        let router_value = client.events().into_iter().find_map(|e| match e {
            Event::Prepare { to, value, .. } if to == contracts().router => Some(value),
            _ => None,
        });
        assert_eq!(router_value, Some(U256::from(500_000_000_000_000_000u128)));
        assert_eq!(
            selector.prompt_mut().questions.last().map(String::as_str),
            Some("Proceed with this swap?")
        );
    }

    #[tokio::test]
    async fn test_standard_mode_skips_gas_token_prompt() {
        let network = network();
        let client = Arc::new(client(&network));
        let mut selector = TokenSelector::new(ScriptedPrompt::new(&["4", "2", "1"]));

        let receipt = run_swap(client.clone(), network, false, true, &mut selector)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(receipt.submission, SubmissionPath::Standard);
        assert_eq!(receipt.amount_in, U256::from(2_000_000u64));
        assert!(receipt.approval.is_some());
        assert!(!client.events().contains(&Event::Sign));
    }

    #[tokio::test]
    async fn test_declined_confirmation_sends_nothing() {
        let network = network();
        let client = Arc::new(client(&network));
        let mut selector = TokenSelector::new(ScriptedPrompt::new(&["1", "0.1", "5", "4", "n"]));

        let result = run_swap(client.clone(), network, true, false, &mut selector)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!client
            .events()
            .iter()
            .any(|e| matches!(e, Event::Prepare { .. } | Event::SendRaw { .. })));
    }

    #[tokio::test]
    async fn test_zero_balance_source_aborts() {
        let network = network();
        let client = Arc::new(client(&network));
        let mut selector = TokenSelector::new(ScriptedPrompt::new(&["3"]));

        let result = run_swap(client.clone(), network, true, false, &mut selector).await;
        assert!(matches!(result, Err(SwapError::ZeroBalance(symbol)) if symbol == "USDT"));
    }

    #[tokio::test]
    async fn test_zero_balance_gas_token_aborts() {
        let network = network();
        let client = Arc::new(client(&network));
        let mut selector = TokenSelector::new(ScriptedPrompt::new(&["1", "0.5", "5", "3"]));

        let result = run_swap(client.clone(), network, true, false, &mut selector).await;
        assert!(matches!(result, Err(SwapError::ZeroBalance(symbol)) if symbol == "USDT"));
        assert!(!client
            .events()
            .iter()
            .any(|e| matches!(e, Event::Call { to, .. } if *to == contracts().pool_factory)));
    }
}
