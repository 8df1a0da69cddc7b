#[macro_use]
extern crate lazy_static;

pub mod cli;
pub mod client;
pub mod core;
pub mod logging;
pub mod selection;
pub mod syncswap;
pub mod transaction;
pub mod utils;

// Re-export commonly used types
pub use client::{ChainClient, EvmClient};
pub use core::{Config, NetworkProfile, SwapError, SwapReceipt, SwapRequest, SwapResult};
pub use selection::TokenSelector;
pub use syncswap::SyncSwap;
