//! Address page UI tests

use super::*;
use gtex::app::{AddressKey, AddressView, NavLink};

fn key() -> AddressKey {
    AddressKey {
        chain: "eth-mainnet".to_string(),
        address: VITALIK.to_string(),
    }
}

fn address_app(loader: Loader<AddressKey, Vec<TokenBalance>>) -> App {
    create_test_app(
        Some(View::Address(AddressView {
            loader,
            selected_link: 0,
        })),
        true,
    )
}

#[test]
fn test_address_screen_shows_truncated_address() {
    let app = address_app(loaded(key(), mock_balances()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "0xd8da...6045"));
    assert!(buffer_contains(&buffer, "c to copy"));
    assert!(!buffer_contains(&buffer, VITALIK));
}

#[test]
fn test_address_screen_shows_balances() {
    let app = address_app(loaded(key(), mock_balances()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "ETH: 1.5000 $4,950.00"));
    assert!(buffer_contains(&buffer, "USDC: 250.0000 $250.00"));
}

#[test]
fn test_address_screen_empty_balances() {
    let app = address_app(loaded(key(), Vec::new()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "No token balances"));
}

#[test]
fn test_address_screen_loading_keeps_header() {
    let app = address_app(loading(key()));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "0xd8da...6045"));
    assert!(buffer_contains(&buffer, "░░░░"));
}

#[test]
fn test_address_screen_error() {
    let app = address_app(failed(key(), "Malformed address provided"));
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Malformed address provided"));
    assert!(!buffer_contains(&buffer, "USDC"));
}

#[test]
fn test_address_links_start_with_nfts() {
    let app = address_app(loaded(key(), mock_balances()));
    let links = app.current_links();

    // NFT picker, then the non-native token contract
    assert_eq!(links.len(), 2);
    match &links[0] {
        NavLink::Nfts(nfts) => {
            assert_eq!(nfts.address, VITALIK);
            assert_eq!(nfts.chains, Config::default().nft_chains);
        }
        other => panic!("expected NFT link, got {other:?}"),
    }
    assert_eq!(
        links[1].copy_text(),
        "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
    );
}
