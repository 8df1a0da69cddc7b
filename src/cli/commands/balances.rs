use crate::cli::display::SwapDisplay;
use crate::client::ChainClient;
use crate::core::{Config, SwapResult};
use crate::selection::DialoguerPrompt;

pub async fn execute(config: Config) -> SwapResult<()> {
    let network = config.network_profile()?;
    SwapDisplay::display_banner(&network);

    let mut prompt = DialoguerPrompt::new();
    let client = super::connect(&config, &network, &mut prompt).await?;
    SwapDisplay::display_wallet(&client.address());

    let balances = super::fetch_balances(&client, &network).await?;
    SwapDisplay::display_balances(&balances);
    Ok(())
}
