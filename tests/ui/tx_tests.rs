//! Transaction receipt UI tests

use super::*;
use gtex::app::{TxKey, TxView};

fn key() -> TxKey {
    TxKey {
        chain: "eth-mainnet".to_string(),
        hash: TX_HASH.to_string(),
    }
}

fn tx_app(loader: Loader<TxKey, Transaction>, relative_time: bool) -> App {
    create_test_app(
        Some(View::Transaction(TxView {
            loader,
            selected_link: 0,
            relative_time,
        })),
        true,
    )
}

#[test]
fn test_tx_screen_shows_heading_and_chain() {
    let app = tx_app(loaded(key(), mock_tx()), false);
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Transaction Receipt"));
    assert!(buffer_contains(&buffer, "0x5c50...2060"));
    assert!(!buffer_contains(&buffer, TX_HASH));
    assert!(buffer_contains(&buffer, "Chain: Ethereum Mainnet"));
    assert!(buffer_contains(&buffer, "Success"));
}

#[test]
fn test_tx_screen_shows_addresses_with_labels() {
    let app = tx_app(loaded(key(), mock_tx()), false);
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "vitalik.eth"));
    assert!(buffer_contains(&buffer, "Interacted with: USD Coin"));
}

#[test]
fn test_tx_screen_shows_fee_rate_and_gas_price() {
    let app = tx_app(loaded(key(), mock_tx()), false);
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Transaction Fee: 0.0004 ETH $1.39"));
    assert!(buffer_contains(&buffer, "1 USD = 0.000303"));
    assert!(buffer_contains(&buffer, "Gas Price: 0.0000000200 ETH"));
}

#[test]
fn test_tx_screen_shows_explorer_and_events() {
    let app = tx_app(loaded(key(), mock_tx()), false);
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "View on Etherscan"));
    assert!(buffer_contains(&buffer, "Events (1)"));
    assert!(buffer_contains(&buffer, "Transfer"));
    assert!(buffer_contains(&buffer, "1000000"));
}

#[test]
fn test_tx_screen_time_toggle() {
    let descriptive = render_to_buffer(&tx_app(loaded(key(), mock_tx()), false), 120, 50);
    assert!(buffer_contains(&descriptive, "April 4 2024 at 09:59:47"));

    let relative = render_to_buffer(&tx_app(loaded(key(), mock_tx()), true), 120, 50);
    assert!(buffer_contains(&relative, "days ago"));
    assert!(!buffer_contains(&relative, "April 4 2024"));
}

#[test]
fn test_tx_screen_loading_shows_skeleton() {
    let app = tx_app(loading(key()), false);
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "░░░░"));
    assert!(!buffer_contains(&buffer, "Transaction Fee"));
}

#[test]
fn test_tx_screen_error() {
    let app = tx_app(failed(key(), "Transaction not found"), false);
    let buffer = render_to_buffer(&app, 120, 50);

    assert!(buffer_contains(&buffer, "Transaction not found"));
    assert!(!buffer_contains(&buffer, "Exchange Rate"));
}

#[test]
fn test_tx_links_include_log_senders() {
    let app = tx_app(loaded(key(), mock_tx()), false);
    let links: Vec<String> = app.current_links().iter().map(|l| l.copy_text()).collect();

    assert_eq!(
        links,
        vec![
            VITALIK.to_string(),
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            "19575410".to_string(),
            "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
        ]
    );
}
