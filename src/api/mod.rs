mod types;

pub use types::*;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::chains::with_uncached;
use crate::loader::fan_out;

pub const DEFAULT_BASE_URL: &str = "https://api.covalenthq.com";

/// Default timeout for API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key not configured (set GOLDRUSH_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// The API answered with `error: true`
    #[error("{message}")]
    Remote { code: Option<u16>, message: String },

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether the failure was reported by the API itself rather than the transport
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::NotFound(_))
    }
}

/// Remote calls consumed by the explorer views
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    async fn get_block(&self, chain: &str, height_or_hash: &str) -> Result<Block, ApiError>;

    async fn get_transaction(&self, chain: &str, tx_hash: &str) -> Result<Transaction, ApiError>;

    /// Transactions included in block `height`, in block order
    async fn get_block_transactions(
        &self,
        chain: &str,
        height: u64,
    ) -> Result<Vec<Transaction>, ApiError>;

    async fn get_token_balances(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Vec<TokenBalance>, ApiError>;

    async fn get_nfts_for_address(
        &self,
        chain: &str,
        address: &str,
        options: QueryOptions,
    ) -> Result<Vec<NftCollection>, ApiError>;

    async fn get_nft_metadata(
        &self,
        chain: &str,
        contract: &str,
        token_id: &str,
        options: QueryOptions,
    ) -> Result<NftContractToken, ApiError>;
}

/// HTTP client for the GoldRush REST API
#[derive(Debug, Clone)]
pub struct GoldRushClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GoldRushClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ApiError> {
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let http = Client::builder()
            .pool_max_idle_per_host(4)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    /// GET `path` and unwrap the response envelope
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GoldRush request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        // Error envelopes come back with non-2xx statuses too, so try the
        // envelope before falling back to the bare status
        match serde_json::from_slice::<Envelope<T>>(&body) {
            Ok(envelope) if envelope.error => Err(ApiError::Remote {
                code: envelope.error_code.or(Some(status.as_u16())),
                message: envelope
                    .error_message
                    .unwrap_or_else(|| "Unknown API error".to_string()),
            }),
            Ok(Envelope { data: Some(data), .. }) => Ok(data),
            Ok(_) if !status.is_success() => Err(ApiError::Http {
                status: status.as_u16(),
                url,
            }),
            Ok(_) => Err(ApiError::Remote {
                code: None,
                message: "Empty response from API".to_string(),
            }),
            Err(_) if !status.is_success() => Err(ApiError::Http {
                status: status.as_u16(),
                url,
            }),
            Err(source) => Err(ApiError::Decode { url, source }),
        }
    }

    async fn get_items<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let data: Items<T> = self.get(path, query).await?;
        Ok(data.items)
    }
}

fn uncached_query(options: QueryOptions) -> Vec<(&'static str, &'static str)> {
    if options.with_uncached {
        vec![("with-uncached", "true")]
    } else {
        Vec::new()
    }
}

#[async_trait]
impl ExplorerApi for GoldRushClient {
    async fn get_block(&self, chain: &str, height_or_hash: &str) -> Result<Block, ApiError> {
        self.get_items(&format!("{chain}/block_v2/{height_or_hash}/"), &[])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("Block {height_or_hash} on {chain}")))
    }

    async fn get_transaction(&self, chain: &str, tx_hash: &str) -> Result<Transaction, ApiError> {
        self.get_items(&format!("{chain}/transaction_v2/{tx_hash}/"), &[])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("Transaction {tx_hash} on {chain}")))
    }

    async fn get_block_transactions(
        &self,
        chain: &str,
        height: u64,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.get_items(&format!("{chain}/block/{height}/transactions_v3/"), &[])
            .await
    }

    async fn get_token_balances(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Vec<TokenBalance>, ApiError> {
        self.get_items(&format!("{chain}/address/{address}/balances_v2/"), &[])
            .await
    }

    async fn get_nfts_for_address(
        &self,
        chain: &str,
        address: &str,
        options: QueryOptions,
    ) -> Result<Vec<NftCollection>, ApiError> {
        self.get_items(
            &format!("{chain}/address/{address}/balances_nft/"),
            &uncached_query(options),
        )
        .await
    }

    async fn get_nft_metadata(
        &self,
        chain: &str,
        contract: &str,
        token_id: &str,
        options: QueryOptions,
    ) -> Result<NftContractToken, ApiError> {
        self.get_items(
            &format!("{chain}/nft/{contract}/metadata/{token_id}/"),
            &uncached_query(options),
        )
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound(format!("Token {contract} #{token_id} on {chain}")))
    }
}

/// Look up the NFTs held by `address` on every chain in `chains` at once.
///
/// Collections are tagged with their source chain and returned in chain
/// order. A chain whose lookup fails contributes nothing.
pub async fn fetch_nfts_across_chains(
    api: &dyn ExplorerApi,
    chains: &[String],
    address: &str,
) -> Vec<ChainNfts> {
    let address = address.trim();
    fan_out(chains, |chain| async move {
        let options = QueryOptions {
            with_uncached: with_uncached(chain),
        };
        let collections = api.get_nfts_for_address(chain, address, options).await?;
        Ok::<_, ApiError>(
            collections
                .into_iter()
                .map(|collection| ChainNfts {
                    chain_name: chain.clone(),
                    collection,
                })
                .collect(),
        )
    })
    .await
}

/// Look up a single token's metadata with the chain's cache option applied
pub async fn fetch_nft_detail(
    api: &dyn ExplorerApi,
    chain: &str,
    contract: &str,
    token_id: &str,
) -> Result<NftContractToken, ApiError> {
    let options = QueryOptions {
        with_uncached: with_uncached(chain),
    };
    api.get_nft_metadata(chain, contract, token_id, options)
        .await
        .inspect_err(|e| {
            if e.is_remote() {
                warn!(%contract, %token_id, "Error fetching NFT: {e}");
            } else {
                error!(%contract, %token_id, "Error fetching NFT: {e}");
            }
        })
}
