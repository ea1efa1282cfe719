//! UI rendering tests for gtex
//!
//! Views are rendered into a ratatui `TestBackend` and the buffer is
//! searched for expected text.
//! Run with: cargo test --test ui_tests

mod address_tests;
mod block_tests;
mod nft_tests;
mod tx_tests;

use async_trait::async_trait;
use gtex::api::{
    ApiError, Block, ChainNfts, ExplorerApi, NftCollection, NftContractToken, QueryOptions,
    TokenBalance, Transaction,
};
use gtex::app::{App, Focus, View};
use gtex::chains::ChainRegistry;
use gtex::config::Config;
use gtex::context::ExplorerContext;
use gtex::loader::{LoadError, Loader};
use gtex::ui::draw;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use serde_json::json;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const VITALIK: &str = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";
pub const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

// ==================== Stub API ====================

/// Never called by rendering; present so the app has a configured client
pub struct StubApi;

#[async_trait]
impl ExplorerApi for StubApi {
    async fn get_block(&self, _chain: &str, height: &str) -> Result<Block, ApiError> {
        Err(ApiError::NotFound(format!("Block {height}")))
    }

    async fn get_transaction(&self, _chain: &str, hash: &str) -> Result<Transaction, ApiError> {
        Err(ApiError::NotFound(format!("Transaction {hash}")))
    }

    async fn get_block_transactions(
        &self,
        _chain: &str,
        _height: u64,
    ) -> Result<Vec<Transaction>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_token_balances(
        &self,
        _chain: &str,
        _address: &str,
    ) -> Result<Vec<TokenBalance>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_nfts_for_address(
        &self,
        _chain: &str,
        _address: &str,
        _options: QueryOptions,
    ) -> Result<Vec<NftCollection>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_nft_metadata(
        &self,
        _chain: &str,
        contract: &str,
        _token_id: &str,
        _options: QueryOptions,
    ) -> Result<NftContractToken, ApiError> {
        Err(ApiError::NotFound(format!("NFT {contract}")))
    }
}

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config {
        recent_searches: vec![
            VITALIK.to_string(),
            "19575410".to_string(),
            TX_HASH.to_string(),
        ],
        ..Config::default()
    }
}

pub fn mock_block() -> Block {
    serde_json::from_value(json!({
        "signed_at": "2024-04-04T09:59:47Z",
        "height": 19575410,
        "block_hash": "0x8e1b5c2f4a3d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f7",
        "block_parent_hash": "0x1f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a79881f2e3d4c5b6a7988",
        "extra_data": "beaverbuild.org",
        "miner_address": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
        "gas_used": 15000000,
        "gas_limit": 30000000
    }))
    .unwrap()
}

pub fn mock_tx() -> Transaction {
    serde_json::from_value(json!({
        "block_signed_at": "2024-04-04T09:59:47Z",
        "block_height": 19575410,
        "tx_hash": TX_HASH,
        "successful": true,
        "from_address": VITALIK,
        "from_address_label": "vitalik.eth",
        "to_address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        "to_address_label": "USD Coin",
        "value": "0",
        "gas_spent": 21000,
        "gas_price": "20000000000",
        "fees_paid": "421000000000000",
        "gas_quote": 1.39,
        "pretty_gas_quote": "$1.39",
        "gas_quote_rate": 3300.0,
        "gas_metadata": {
            "contract_decimals": 18,
            "contract_name": "Ether",
            "contract_ticker_symbol": "ETH",
            "contract_address": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"
        },
        "explorers": [{"label": "Etherscan", "url": "https://etherscan.io/tx/0x5c50"}],
        "log_events": [{
            "sender_address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "sender_name": "USD Coin",
            "sender_contract_ticker_symbol": "USDC",
            "log_offset": 12,
            "decoded": {
                "name": "Transfer",
                "signature": "Transfer(indexed address from, indexed address to, uint256 value)",
                "params": [
                    {"name": "from", "type": "address", "value": VITALIK},
                    {"name": "value", "type": "uint256", "value": "1000000"}
                ]
            }
        }]
    }))
    .unwrap()
}

pub const CREATION_HASH: &str =
    "0x9f0b3c6a1e2d4f5a6b7c8d9e0f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c";

pub fn mock_block_txs() -> Vec<Transaction> {
    serde_json::from_value(json!([
        {
            "block_signed_at": "2024-04-04T09:59:47Z",
            "block_height": 19575410,
            "tx_hash": TX_HASH,
            "successful": true,
            "from_address": VITALIK,
            "to_address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
        },
        {
            "block_signed_at": "2024-04-04T09:59:47Z",
            "block_height": 19575410,
            "tx_hash": CREATION_HASH,
            "successful": false,
            "from_address": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
            "to_address": null
        }
    ]))
    .unwrap()
}

pub fn mock_balances() -> Vec<TokenBalance> {
    serde_json::from_value(json!([
        {
            "contract_name": "Ether",
            "contract_ticker_symbol": "ETH",
            "contract_decimals": 18,
            "contract_address": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
            "balance": "1500000000000000000",
            "quote": 4950.0,
            "pretty_quote": "$4,950.00",
            "native_token": true
        },
        {
            "contract_name": "USD Coin",
            "contract_ticker_symbol": "USDC",
            "contract_decimals": 6,
            "contract_address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "balance": "250000000",
            "quote": 250.0,
            "pretty_quote": "$250.00",
            "native_token": false
        }
    ]))
    .unwrap()
}

pub fn mock_collection() -> NftCollection {
    serde_json::from_value(json!({
        "contract_name": "Pudgy Penguins",
        "contract_ticker_symbol": "PPG",
        "contract_address": "0xbd3531da5cf5857e7cfaa92426877b022e612cf8",
        "supports_erc": ["erc721"],
        "balance": "2",
        "nft_data": [
            {"token_id": "6873", "external_data": {"name": "Pudgy Penguin #6873"}},
            {"token_id": 412, "external_data": null}
        ]
    }))
    .unwrap()
}

pub fn mock_nfts() -> Vec<ChainNfts> {
    vec![
        ChainNfts {
            chain_name: "eth-mainnet".to_string(),
            collection: mock_collection(),
        },
        ChainNfts {
            chain_name: "base-mainnet".to_string(),
            collection: serde_json::from_value(json!({
                "contract_name": "Based Ghouls",
                "contract_address": "0xef0182dc0574cd5874494a120750fd222fdb909a",
                "nft_data": [{"token_id": "77"}]
            }))
            .unwrap(),
        },
    ]
}

pub fn mock_nft_detail() -> NftContractToken {
    serde_json::from_value(json!({
        "contract_name": "Pudgy Penguins",
        "contract_ticker_symbol": "PPG",
        "contract_address": "0xbd3531da5cf5857e7cfaa92426877b022e612cf8",
        "nft_data": {
            "token_id": "6873",
            "original_owner": VITALIK,
            "external_data": {
                "name": "Pudgy Penguin #6873",
                "image_512": "https://img.example/6873-512.png",
                "attributes": [
                    {"trait_type": "Body", "value": "Turtleneck"},
                    {"trait_type": "Face", "value": "Smile"}
                ]
            }
        }
    }))
    .unwrap()
}

// ==================== Loader Builders ====================

pub fn loading<K: Clone + PartialEq + Debug, T>(key: K) -> Loader<K, T> {
    let mut loader = Loader::new();
    loader.request(key);
    loader
}

pub fn loaded<K: Clone + PartialEq + Debug, T>(key: K, value: T) -> Loader<K, T> {
    let mut loader = Loader::new();
    let ticket = loader.request(key);
    loader.resolve(ticket, Ok(value));
    loader
}

pub fn failed<K: Clone + PartialEq + Debug, T>(key: K, message: &str) -> Loader<K, T> {
    let mut loader = Loader::new();
    let ticket = loader.request(key);
    loader.resolve(ticket, Err(LoadError::remote(message)));
    loader
}

pub fn create_test_app(view: Option<View>, with_key: bool) -> App {
    let (tx, _rx) = mpsc::channel(8);
    let ctx = with_key.then(|| {
        Arc::new(ExplorerContext::new(
            Arc::new(StubApi),
            ChainRegistry::default(),
        ))
    });

    let mut app = App::new(mock_config(), ctx, tx);
    if view.is_some() {
        app.search_input = tui_input::Input::new("query".to_string());
        app.focus = Focus::Results;
    }
    app.view = view;
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        content.push_str(&buffer_line(buffer, y));
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
