use crate::cli::display::SwapDisplay;
use crate::core::{NetworkProfile, SwapResult};

pub fn execute() -> SwapResult<()> {
    let networks = NetworkProfile::available()
        .into_iter()
        .map(NetworkProfile::load)
        .collect::<SwapResult<Vec<_>>>()?;
    SwapDisplay::display_networks(&networks);
    Ok(())
}
