use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;
use crate::chains::DEFAULT_CHAIN;

/// Environment variable that overrides the stored API key
pub const API_KEY_ENV: &str = "GOLDRUSH_API_KEY";

const MAX_RECENT_SEARCHES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default = "default_chain")]
    pub chain: String,
    /// Chains queried by the NFT picker
    #[serde(default = "default_nft_chains")]
    pub nft_chains: Vec<String>,
    pub base_url: Option<String>,
    #[serde(default)]
    pub recent_searches: Vec<String>,
}

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

fn default_nft_chains() -> Vec<String> {
    ["eth-mainnet", "matic-mainnet", "base-mainnet", "optimism-mainnet", "arbitrum-mainnet"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            chain: default_chain(),
            nft_chains: default_nft_chains(),
            base_url: None,
            recent_searches: Vec::new(),
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/gtex on Linux)
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("gtex"))
            .context("Could not determine config directory")
    }

    /// Returns the config file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {dir:?}"))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// API key to use: environment first, then the stored key
    pub fn effective_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Set the API key and persist
    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    /// Set the selected chain and persist
    pub fn set_chain(&mut self, chain: String) -> Result<()> {
        self.chain = chain;
        self.save()
    }

    /// Move `query` to the front of the history, keeping the last 10
    pub fn push_recent_search(&mut self, query: String) {
        self.recent_searches.retain(|s| s != &query);
        self.recent_searches.insert(0, query);
        self.recent_searches.truncate(MAX_RECENT_SEARCHES);
    }

    /// Add a search to recent history and persist
    pub fn add_recent_search(&mut self, query: String) -> Result<()> {
        self.push_recent_search(query);
        self.save()
    }
}
