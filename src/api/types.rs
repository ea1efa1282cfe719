use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

// ============================================================================
// Response Envelope
// ============================================================================

/// Every GoldRush response wraps its payload the same way
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub error: bool,
    pub error_message: Option<String>,
    pub error_code: Option<u16>,
}

/// `data` of list-style responses
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Items<T> {
    pub address: Option<String>,
    pub chain_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

/// Request options shared by NFT lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub with_uncached: bool,
}

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub signed_at: DateTime<Utc>,
    pub height: u64,
    pub block_hash: String,
    pub block_parent_hash: Option<String>,
    pub extra_data: Option<String>,
    pub miner_address: Option<String>,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default)]
    pub gas_limit: u64,
}

impl Block {
    /// Gas used as a percentage of the limit; 0 when the limit is unknown
    pub fn gas_used_pct(&self) -> f64 {
        if self.gas_limit == 0 {
            return 0.0;
        }
        (self.gas_used as f64 / self.gas_limit as f64) * 100.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GasMetadata {
    pub contract_decimals: u8,
    pub contract_name: Option<String>,
    pub contract_ticker_symbol: Option<String>,
    pub contract_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Explorer {
    pub label: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<serde_json::Value>,
}

impl LogParam {
    pub fn display_value(&self) -> String {
        match &self.value {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "null".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodedEvent {
    pub name: String,
    pub signature: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: Vec<LogParam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogEvent {
    pub sender_address: Option<String>,
    pub sender_name: Option<String>,
    pub sender_contract_ticker_symbol: Option<String>,
    pub log_offset: Option<u64>,
    pub decoded: Option<DecodedEvent>,
}

/// Transaction receipt with decoded metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub block_signed_at: DateTime<Utc>,
    pub block_height: Option<u64>,
    pub tx_hash: String,
    #[serde(default)]
    pub successful: bool,
    pub from_address: String,
    pub from_address_label: Option<String>,
    pub to_address: Option<String>,
    pub to_address_label: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub value: Option<String>,
    pub pretty_value_quote: Option<String>,
    pub gas_spent: Option<u64>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub gas_price: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub fees_paid: Option<String>,
    pub gas_quote: Option<f64>,
    pub pretty_gas_quote: Option<String>,
    pub gas_quote_rate: Option<f64>,
    pub gas_metadata: Option<GasMetadata>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explorers: Vec<Explorer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub log_events: Vec<LogEvent>,
}

impl Transaction {
    pub fn native_decimals(&self) -> u8 {
        self.gas_metadata
            .as_ref()
            .map(|m| m.contract_decimals)
            .unwrap_or(18)
    }

    pub fn native_ticker(&self) -> Option<&str> {
        self.gas_metadata
            .as_ref()
            .and_then(|m| m.contract_ticker_symbol.as_deref())
    }

    /// Native units bought by 1 USD, from the quote rate
    pub fn usd_exchange_rate(&self) -> f64 {
        1.0 / self.gas_quote_rate.unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenBalance {
    pub contract_name: Option<String>,
    pub contract_ticker_symbol: Option<String>,
    #[serde(default)]
    pub contract_decimals: Option<u8>,
    pub contract_address: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub balance: Option<String>,
    pub quote: Option<f64>,
    pub pretty_quote: Option<String>,
    #[serde(default)]
    pub native_token: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NftAttribute {
    pub trait_type: Option<String>,
    pub value: Option<serde_json::Value>,
}

impl NftAttribute {
    pub fn display_value(&self) -> String {
        match &self.value {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NftExternalData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_512: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<NftAttribute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NftToken {
    #[serde(default, deserialize_with = "number_or_string")]
    pub token_id: Option<String>,
    pub token_url: Option<String>,
    pub original_owner: Option<String>,
    pub external_data: Option<NftExternalData>,
}

impl NftToken {
    pub fn image_url(&self) -> Option<&str> {
        self.external_data
            .as_ref()
            .and_then(|d| d.image_512.as_deref().or(d.image.as_deref()))
    }
}

/// One NFT collection held by an address
#[derive(Debug, Clone, Deserialize)]
pub struct NftCollection {
    pub contract_name: Option<String>,
    pub contract_ticker_symbol: Option<String>,
    pub contract_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub supports_erc: Vec<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub balance: Option<String>,
    pub pretty_floor_price_quote: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nft_data: Vec<NftToken>,
}

/// An NFT collection tagged with the chain it was found on
#[derive(Debug, Clone)]
pub struct ChainNfts {
    pub chain_name: String,
    pub collection: NftCollection,
}

/// Metadata lookup result for a single token of a contract
#[derive(Debug, Clone, Deserialize)]
pub struct NftContractToken {
    pub contract_name: Option<String>,
    pub contract_ticker_symbol: Option<String>,
    pub contract_address: String,
    pub nft_data: NftToken,
}

// ============================================================================
// Serde Helpers
// ============================================================================

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Large integers arrive either as JSON strings or as numbers
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
