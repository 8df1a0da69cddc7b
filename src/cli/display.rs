use crate::core::{
    constants::BALANCE_DISPLAY_PRECISION, NetworkProfile, SubmissionPath, SwapReceipt,
    SwapRequest, TokenBalances, TokenInfo,
};
use crate::utils::{format_units, short_address};
use colored::*;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Display helper for the interactive swap flow
pub struct SwapDisplay;

impl SwapDisplay {
    pub fn display_banner(network: &NetworkProfile) {
        println!("{}", "🚀 SyncSwap Swapper".bold().cyan());
        println!(
            "Network: {} (chain {})",
            network.name.bold(),
            network.chain_id
        );
    }

    pub fn display_wallet(address: &ethers::types::Address) {
        println!("Wallet: {}", style(format!("{:?}", address)).dim());
    }

    /// Balances in network table order
    pub fn display_balances(balances: &TokenBalances) {
        println!("\n{}", style("💰 Balances").bold().underlined());
        for token in balances.iter() {
            let amount = format_units(token.balance, token.decimals, BALANCE_DISPLAY_PRECISION);
            let amount = if token.balance.is_zero() {
                amount.dimmed()
            } else {
                amount.green()
            };
            println!(
                "  {:<8} {} {}",
                token.symbol.bold(),
                amount,
                style(short_address(&token.address)).dim()
            );
        }
    }

    pub fn display_networks(networks: &[NetworkProfile]) {
        for network in networks {
            let deployment = if network.syncswap.is_some() {
                "SyncSwap".green()
            } else {
                "no SyncSwap".dimmed()
            };
            println!(
                "{} {} [{}]",
                style("►").cyan(),
                format!("{} (chain {})", network.name, network.chain_id).bold(),
                deployment
            );
            for (symbol, address) in &network.tokens {
                println!("  {:<8} {}", symbol, style(format!("{:?}", address)).dim());
            }
        }
    }

    /// Swap summary shown before the confirmation prompt
    pub fn display_swap_summary(request: &SwapRequest, from: &TokenInfo, network: &NetworkProfile) {
        println!("\n{}", style("💱 Swap Summary").bold().underlined());
        println!(
            "Swap: {} {} → {}",
            format_units(request.amount_in, from.decimals, BALANCE_DISPLAY_PRECISION),
            request.from_token.bold(),
            request.to_token.bold()
        );
        if request.use_paymaster {
            println!("Gas: paymaster, paid in {}", request.gas_token.yellow());
        } else {
            println!("Gas: {}", network.native_symbol.yellow());
        }
    }

    pub fn display_swap_result(receipt: &SwapReceipt, network: &NetworkProfile) {
        println!("\n{}", style("✅ Swap Successful!").bold().green());
        if let Some(approval) = &receipt.approval {
            println!(
                "Approval: {}",
                style(network.tx_url(&approval.hash)).dim()
            );
        }
        let path = match receipt.submission {
            SubmissionPath::Paymaster => receipt.submission.to_string().yellow(),
            SubmissionPath::Standard => receipt.submission.to_string().blue(),
        };
        println!("Submission: {}", path.bold());
        println!("Pool: {}", style(format!("{:?}", receipt.pool)).dim());
        println!("Min Output (raw): {}", receipt.min_amount_out);
        if let Some(block) = receipt.outcome.block_number {
            println!("Block: {}", block);
        }
        println!("Explorer: {}", network.tx_url(&receipt.outcome.hash).underline());
    }

    /// Create a spinner for network operations
    pub fn create_progress_bar(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }
}
