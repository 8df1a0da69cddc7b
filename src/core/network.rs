use crate::core::{constants::*, SwapError, SwapResult};
use ethers::types::{Address, H256};
use std::collections::HashMap;

/// Static description of a supported network, as written in source.
struct NetworkSpec {
    name: &'static str,
    chain_id: u64,
    rpc_url: &'static str,
    explorer_url: &'static str,
    tokens: &'static [(&'static str, &'static str)],
    syncswap: Option<SyncSwapSpec>,
}

struct SyncSwapSpec {
    pool_factory: &'static str,
    router: &'static str,
    paymaster: &'static str,
}

static NETWORKS: &[NetworkSpec] = &[
    NetworkSpec {
        name: NETWORK_ARBITRUM,
        chain_id: 42161,
        rpc_url: "https://arb1.arbitrum.io/rpc",
        explorer_url: "https://arbiscan.io",
        tokens: &[
            ("ETH", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            ("WETH", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            ("USDC.e", "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8"),
            ("USDT", "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
            ("ZRO", "0x6985884C4392D348587B19cb9eAAf157F13271cd"),
        ],
        syncswap: None,
    },
    NetworkSpec {
        name: NETWORK_OPTIMISM,
        chain_id: 10,
        rpc_url: "https://mainnet.optimism.io",
        explorer_url: "https://optimistic.etherscan.io",
        tokens: &[
            ("ETH", "0x4200000000000000000000000000000000000006"),
            ("WETH", "0x4200000000000000000000000000000000000006"),
        ],
        syncswap: None,
    },
    NetworkSpec {
        name: NETWORK_ETHEREUM,
        chain_id: 1,
        rpc_url: "https://eth.llamarpc.com",
        explorer_url: "https://etherscan.io",
        tokens: &[
            ("ETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            ("WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        ],
        syncswap: None,
    },
    NetworkSpec {
        name: NETWORK_ZKSYNC,
        chain_id: 324,
        rpc_url: "https://mainnet.era.zksync.io",
        explorer_url: "https://explorer.zksync.io",
        tokens: &[
            ("ETH", "0x5AEa5775959fBC2557Cc8789bC1bf90A239D9a91"),
            ("WETH", "0x5AEa5775959fBC2557Cc8789bC1bf90A239D9a91"),
            ("USDT", "0x493257fD37EDB34451f62EDf8D2a0C418852bA4C"),
            ("USDC.e", "0x3355df6D4c9C3035724Fd0e3914dE96A5a83aaf4"),
            ("USDC", "0x1d17CBcF0D6D143135aE902365D2E5e2A16538D4"),
        ],
        syncswap: Some(SyncSwapSpec {
            pool_factory: "0xf2DAd89f2788a8CD54625C60b55cD3d2D0ACa7Cb",
            router: "0x9B5def958d0f3b6955cBEa4D5B7809b2fb26b059",
            paymaster: "0x0c08f298A75A090DC4C0BB4CaA4204B8B9D156c1",
        }),
    },
];

lazy_static! {
    static ref NETWORKS_BY_NAME: HashMap<String, &'static NetworkSpec> = NETWORKS
        .iter()
        .map(|spec| (spec.name.to_lowercase(), spec))
        .collect();
}

/// SyncSwap protocol contracts deployed on a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSwapContracts {
    pub pool_factory: Address,
    pub router: Address,
    pub paymaster: Address,
}

/// Validated, immutable network parameters.
#[derive(Debug, Clone)]
pub struct NetworkProfile {
    pub name: String,
    pub chain_id: u64,
    pub native_symbol: String,
    pub default_rpc_url: String,
    pub explorer_url: String,
    /// Symbol to address, in display order.
    pub tokens: Vec<(String, Address)>,
    pub syncswap: Option<SyncSwapContracts>,
}

impl NetworkProfile {
    /// Load a network by name (case-insensitive), parsing every address.
    pub fn load(name: &str) -> SwapResult<Self> {
        let spec = NETWORKS_BY_NAME
            .get(&name.to_lowercase())
            .ok_or_else(|| SwapError::UnknownNetwork(name.to_string()))?;

        let tokens = spec
            .tokens
            .iter()
            .map(|(symbol, address)| parse_address(address).map(|a| (symbol.to_string(), a)))
            .collect::<SwapResult<Vec<_>>>()?;

        let syncswap = match &spec.syncswap {
            Some(contracts) => Some(SyncSwapContracts {
                pool_factory: parse_address(contracts.pool_factory)?,
                router: parse_address(contracts.router)?,
                paymaster: parse_address(contracts.paymaster)?,
            }),
            None => None,
        };

        Ok(Self {
            name: spec.name.to_string(),
            chain_id: spec.chain_id,
            native_symbol: NATIVE_SYMBOL.to_string(),
            default_rpc_url: spec.rpc_url.to_string(),
            explorer_url: spec.explorer_url.to_string(),
            tokens,
            syncswap,
        })
    }

    /// Names of all built-in networks.
    pub fn available() -> Vec<&'static str> {
        NETWORKS.iter().map(|spec| spec.name).collect()
    }

    pub fn with_syncswap(mut self, contracts: SyncSwapContracts) -> Self {
        self.syncswap = Some(contracts);
        self
    }

    pub fn token_address(&self, symbol: &str) -> SwapResult<Address> {
        self.tokens
            .iter()
            .find(|(name, _)| name == symbol)
            .map(|(_, address)| *address)
            .ok_or_else(|| SwapError::TokenNotFound(symbol.to_string(), self.name.clone()))
    }

    pub fn is_native(&self, symbol: &str) -> bool {
        symbol == self.native_symbol
    }

    pub fn syncswap_contracts(&self) -> SwapResult<SyncSwapContracts> {
        self.syncswap
            .ok_or_else(|| SwapError::UnsupportedNetwork(self.name.clone()))
    }

    pub fn tx_url(&self, hash: &H256) -> String {
        format!("{}/tx/{:?}", self.explorer_url, hash)
    }
}

fn parse_address(value: &str) -> SwapResult<Address> {
    value
        .parse::<Address>()
        .map_err(|_| SwapError::InvalidAddress(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_network_loads() {
        for name in NetworkProfile::available() {
            let profile = NetworkProfile::load(name).unwrap();
            assert_eq!(profile.name, name);
            assert!(!profile.tokens.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let profile = NetworkProfile::load("ZKSYNC").unwrap();
        assert_eq!(profile.chain_id, 324);
        assert!(profile.syncswap.is_some());
    }

    #[test]
    fn test_unknown_network() {
        let err = NetworkProfile::load("Solana").unwrap_err();
        assert!(matches!(err, SwapError::UnknownNetwork(name) if name == "Solana"));
    }

    #[test]
    fn test_native_aliases_wrapped_token() {
        let profile = NetworkProfile::load(NETWORK_ARBITRUM).unwrap();
        assert_eq!(
            profile.token_address("ETH").unwrap(),
            profile.token_address("WETH").unwrap()
        );
        assert!(profile.is_native("ETH"));
        assert!(!profile.is_native("WETH"));
    }

    #[test]
    fn test_missing_token_and_deployment() {
        let profile = NetworkProfile::load(NETWORK_OPTIMISM).unwrap();
        assert!(matches!(
            profile.token_address("USDC"),
            Err(SwapError::TokenNotFound(_, _))
        ));
        assert!(matches!(
            profile.syncswap_contracts(),
            Err(SwapError::UnsupportedNetwork(_))
        ));
    }

    #[test]
    fn test_token_order_is_preserved() {
        let profile = NetworkProfile::load(NETWORK_ZKSYNC).unwrap();
        let symbols: Vec<&str> = profile.tokens.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(symbols, vec!["ETH", "WETH", "USDT", "USDC.e", "USDC"]);
    }
}
