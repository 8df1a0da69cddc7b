use crate::core::{constants::*, error::SwapResult, NetworkProfile, SwapError};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: String,
    /// Overrides the network's default RPC endpoint.
    pub rpc_url: Option<String>,
    pub proxy: Option<String>,
    #[serde(skip_serializing)]
    pub private_key: Option<String>,
    pub use_paymaster: bool,
    pub confirmations: usize,
    pub log_file: Option<PathBuf>,
}

/// Command-line overrides; `None` leaves the environment value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub network: Option<String>,
    pub rpc_url: Option<String>,
    pub proxy: Option<String>,
    pub no_paymaster: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> SwapResult<Self> {
        Ok(Self {
            network: env::var("NETWORK").unwrap_or_else(|_| DEFAULT_NETWORK.to_string()),
            rpc_url: non_empty(env::var("RPC_URL").ok()),
            proxy: non_empty(env::var("PROXY").ok()),
            private_key: non_empty(env::var("PRIVATE_KEY").ok()),
            use_paymaster: match env::var("USE_PAYMASTER") {
                Ok(value) => parse_bool(&value).ok_or_else(|| {
                    SwapError::ConfigError(format!("USE_PAYMASTER is not a boolean: {}", value))
                })?,
                Err(_) => true,
            },
            confirmations: env::var("CONFIRMATIONS")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_CONFIRMATIONS),
            log_file: match env::var("LOG_FILE") {
                Ok(path) if path.is_empty() => None,
                Ok(path) => Some(PathBuf::from(path)),
                Err(_) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
            },
        })
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(network) = overrides.network {
            self.network = network;
        }
        if overrides.rpc_url.is_some() {
            self.rpc_url = overrides.rpc_url;
        }
        if overrides.proxy.is_some() {
            self.proxy = overrides.proxy;
        }
        if overrides.no_paymaster {
            self.use_paymaster = false;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }

    pub fn validate(&self) -> SwapResult<()> {
        NetworkProfile::load(&self.network)?;

        if let Some(url) = &self.rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SwapError::ConfigError(format!(
                    "RPC URL must be http(s): {}",
                    url
                )));
            }
        }

        if let Some(proxy) = &self.proxy {
            let supported = ["http://", "https://", "socks5://", "socks5h://"];
            if !supported.iter().any(|scheme| proxy.starts_with(scheme)) {
                return Err(SwapError::ConfigError(format!(
                    "Unsupported proxy scheme: {}",
                    proxy
                )));
            }
        }

        if self.confirmations == 0 {
            return Err(SwapError::ConfigError(
                "Confirmations must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn network_profile(&self) -> SwapResult<NetworkProfile> {
        NetworkProfile::load(&self.network)
    }

    pub fn rpc_url_for(&self, profile: &NetworkProfile) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| profile.default_rpc_url.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            rpc_url: None,
            proxy: None,
            private_key: None,
            use_paymaster: true,
            confirmations: DEFAULT_CONFIRMATIONS,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
