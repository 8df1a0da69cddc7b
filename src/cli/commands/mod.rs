pub mod balances;
pub mod networks;
pub mod swap;

use crate::cli::display::SwapDisplay;
use crate::client::{get_balance_tokens, ChainClient, EvmClient};
use crate::core::{Config, NetworkProfile, SwapResult, TokenBalances};
use crate::selection::Prompt;
use log::info;

/// Resolve the key and proxy (prompting for whatever the config lacks) and
/// connect to the network's RPC.
pub(crate) async fn connect<P: Prompt>(
    config: &Config,
    network: &NetworkProfile,
    prompt: &mut P,
) -> SwapResult<EvmClient> {
    let private_key = match &config.private_key {
        Some(key) => key.clone(),
        None => prompt.read_secret("Private key")?,
    };

    let mut config = config.clone();
    if config.proxy.is_none() {
        config.proxy = prompt.read_optional("Proxy URL (leave empty for none)")?;
        config.validate()?;
    }
    if let Some(proxy) = &config.proxy {
        info!("Using proxy {}", proxy);
    }

    let pb = SwapDisplay::create_progress_bar("Connecting...");
    let client = EvmClient::connect(&config, network, &private_key).await;
    pb.finish_and_clear();
    client
}

pub(crate) async fn fetch_balances<C: ChainClient + ?Sized>(
    client: &C,
    network: &NetworkProfile,
) -> SwapResult<TokenBalances> {
    let pb = SwapDisplay::create_progress_bar("Fetching balances...");
    let balances = get_balance_tokens(client, network).await;
    pb.finish_and_clear();
    balances
}
