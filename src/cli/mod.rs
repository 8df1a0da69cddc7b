use crate::core::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod display;

#[derive(Parser)]
#[command(name = "syncswapper")]
#[command(about = "Swap tokens on SyncSwap with optional paymaster gas payment", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `swap`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick tokens and an amount interactively, then swap
    Swap(SwapArgs),

    /// Show the wallet's balance of every configured token
    Balances,

    /// List built-in networks and their tokens
    Networks,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Network name (Arbitrum, Optimism, Ethereum, zkSync)
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// RPC endpoint overriding the network default
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// HTTP(S) or SOCKS5 proxy for RPC traffic
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Pay gas in ETH instead of through the paymaster
    #[arg(long, global = true)]
    pub no_paymaster: bool,

    /// Append log records to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct SwapArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl GlobalArgs {
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            network: self.network,
            rpc_url: self.rpc_url,
            proxy: self.proxy,
            no_paymaster: self.no_paymaster,
            log_file: self.log_file,
        }
    }
}
