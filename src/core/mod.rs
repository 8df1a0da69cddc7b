pub mod config;
pub mod constants;
pub mod error;
pub mod network;
pub mod types;

pub use config::{Config, ConfigOverrides};
pub use constants::*;
pub use error::{InputError, SwapError, SwapResult};
pub use network::{NetworkProfile, SyncSwapContracts};
pub use types::*;
