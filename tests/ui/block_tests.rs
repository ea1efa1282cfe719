//! Block page UI tests

use super::*;
use gtex::app::{BlockKey, BlockView, NavLink};

fn key() -> BlockKey {
    BlockKey {
        chain: "eth-mainnet".to_string(),
        height: 19575410,
    }
}

fn block_app(loader: Loader<BlockKey, Block>) -> App {
    block_app_with_txs(loader, loaded(key(), mock_block_txs()))
}

fn block_app_with_txs(
    loader: Loader<BlockKey, Block>,
    txs: Loader<BlockKey, Vec<Transaction>>,
) -> App {
    create_test_app(
        Some(View::Block(BlockView {
            loader,
            txs,
            selected_link: 0,
        })),
        true,
    )
}

fn skeleton_rows(buffer: &Buffer) -> usize {
    buffer_to_string(buffer)
        .lines()
        .filter(|line| line.contains("░░░░"))
        .count()
}

#[test]
fn test_block_screen_shows_height_with_separators() {
    let app = block_app(loaded(key(), mock_block()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Height: 19,575,410"));
    assert!(buffer_contains(&buffer, "Block #19,575,410"));
}

#[test]
fn test_block_screen_shows_gas_percentage() {
    let app = block_app(loaded(key(), mock_block()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "15,000,000"));
    assert!(buffer_contains(&buffer, "50.00%"));
    assert!(buffer_contains(&buffer, "Gas Limit: 30,000,000"));
}

#[test]
fn test_block_screen_shows_details() {
    let app = block_app(loaded(key(), mock_block()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "April 4 2024 at 09:59:47"));
    assert!(buffer_contains(&buffer, "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5"));
    assert!(buffer_contains(&buffer, "Block Parent Hash"));
    assert!(buffer_contains(&buffer, "beaverbuild.org"));
}

#[test]
fn test_block_screen_loading_shows_skeleton() {
    let app = block_app(loading(key()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "░░░░"));
    assert!(!buffer_contains(&buffer, "Block Hash"));
}

#[test]
fn test_block_screen_error_shows_message_only() {
    let app = block_app_with_txs(
        failed(key(), "Block not found"),
        failed(key(), "Block not found"),
    );
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Block not found"));
    assert!(!buffer_contains(&buffer, "Gas Limit"));
    assert!(!buffer_contains(&buffer, "░░░░"));
}

#[test]
fn test_block_links_follow_display_order() {
    let app = block_app(loaded(key(), mock_block()));
    let links = app.current_links();

    // Miner, parent, then each transaction in block order
    assert_eq!(links.len(), 4);
    assert_eq!(
        links[0].copy_text(),
        "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5"
    );
    assert_eq!(links[1].copy_text(), "19575409");
    assert_eq!(links[2].copy_text(), TX_HASH);
    assert_eq!(links[3].copy_text(), CREATION_HASH);
}

#[test]
fn test_block_transactions_listed_with_parties() {
    let app = block_app(loaded(key(), mock_block()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Transactions (2)"));
    assert!(buffer_contains(
        &buffer,
        "0x5c50...2060 ✓ 0xd8da...6045 → 0xa0b8...eb48"
    ));
    assert!(buffer_contains(
        &buffer,
        "0x9f0b...2b3c ✗ 0x9522...afe5 → Contract Creation"
    ));
}

#[test]
fn test_block_transactions_loading_shows_own_skeleton() {
    let app = block_app_with_txs(loaded(key(), mock_block()), loading(key()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Gas Limit: 30,000,000"));
    assert!(buffer_contains(&buffer, "Transactions"));
    assert!(!buffer_contains(&buffer, "Transactions ("));
    assert_eq!(skeleton_rows(&buffer), 5);
}

#[test]
fn test_block_transactions_error_keeps_header() {
    let app = block_app_with_txs(loaded(key(), mock_block()), failed(key(), "Rate limited"));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Height: 19,575,410"));
    assert!(buffer_contains(&buffer, "Rate limited"));
    assert!(!buffer_contains(&buffer, "0x5c50...2060"));
    assert_eq!(app.current_links().len(), 2);
}

#[test]
fn test_block_without_transactions() {
    let app = block_app_with_txs(loaded(key(), mock_block()), loaded(key(), Vec::new()));
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Transactions (0)"));
    assert!(buffer_contains(&buffer, "No transactions in this block"));
}

#[test]
fn test_block_transaction_links_before_header_loads() {
    let app = block_app_with_txs(loading(key()), loaded(key(), mock_block_txs()));
    let links = app.current_links();

    assert_eq!(links.len(), 2);
    match &links[0] {
        NavLink::Transaction(tx) => {
            assert_eq!(tx.chain, "eth-mainnet");
            assert_eq!(tx.hash, TX_HASH);
        }
        other => panic!("expected transaction link, got {other:?}"),
    }
}
