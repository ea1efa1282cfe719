use ratatui::style::Color;

/// Static metadata about a chain the API can query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    /// API chain name, e.g. "eth-mainnet"
    pub name: &'static str,
    pub label: &'static str,
    pub native_ticker: &'static str,
    /// Theme colour as 0xRRGGBB
    pub color_hex: u32,
}

impl ChainInfo {
    pub fn color(&self) -> Color {
        Color::from_u32(self.color_hex)
    }
}

pub const DEFAULT_CHAIN: &str = "eth-mainnet";

pub const BUILTIN_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        name: "eth-mainnet",
        label: "Ethereum Mainnet",
        native_ticker: "ETH",
        color_hex: 0x627EEA,
    },
    ChainInfo {
        name: "matic-mainnet",
        label: "Polygon Mainnet",
        native_ticker: "MATIC",
        color_hex: 0x8247E5,
    },
    ChainInfo {
        name: "arbitrum-mainnet",
        label: "Arbitrum Mainnet",
        native_ticker: "ETH",
        color_hex: 0x28A0F0,
    },
    ChainInfo {
        name: "optimism-mainnet",
        label: "Optimism Mainnet",
        native_ticker: "ETH",
        color_hex: 0xFF0420,
    },
    ChainInfo {
        name: "base-mainnet",
        label: "Base Mainnet",
        native_ticker: "ETH",
        color_hex: 0x0052FF,
    },
    ChainInfo {
        name: "bsc-mainnet",
        label: "BNB Smart Chain",
        native_ticker: "BNB",
        color_hex: 0xF0B90B,
    },
    ChainInfo {
        name: "avalanche-mainnet",
        label: "Avalanche C-Chain",
        native_ticker: "AVAX",
        color_hex: 0xE84142,
    },
];

/// Chains served from the API's NFT cache. Everything else is queried
/// with `with-uncached` set.
pub const ALLOWED_CACHE_CHAINS: &[&str] = &[
    "eth-mainnet",
    "matic-mainnet",
    "bsc-mainnet",
    "avalanche-mainnet",
    "optimism-mainnet",
    "fantom-mainnet",
    "arbitrum-mainnet",
    "arbitrum-nova-mainnet",
    "base-mainnet",
];

pub fn with_uncached(chain: &str) -> bool {
    !ALLOWED_CACHE_CHAINS.contains(&chain)
}

/// Read-only chain list shared by every view
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<ChainInfo>,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new(BUILTIN_CHAINS.to_vec())
    }
}

impl ChainRegistry {
    pub fn new(chains: Vec<ChainInfo>) -> Self {
        Self { chains }
    }

    pub fn find(&self, name: &str) -> Option<&ChainInfo> {
        self.chains.iter().find(|c| c.name == name)
    }

    pub fn all(&self) -> &[ChainInfo] {
        &self.chains
    }

    /// Label for a chain, falling back to its raw name
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.find(name).map(|c| c.label).unwrap_or(name)
    }

    pub fn native_ticker(&self, name: &str) -> &'static str {
        self.find(name).map(|c| c.native_ticker).unwrap_or("ETH")
    }

    /// Chain after `current` in registry order, wrapping around
    pub fn next_after(&self, current: &str) -> Option<&ChainInfo> {
        if self.chains.is_empty() {
            return None;
        }
        let idx = self
            .chains
            .iter()
            .position(|c| c.name == current)
            .map(|i| (i + 1) % self.chains.len())
            .unwrap_or(0);
        self.chains.get(idx)
    }
}
