//! NFT picker and detail UI tests

use super::*;
use gtex::app::{NftDetailView, NftKey, NftPickerView, NftsKey};
use gtex::ui::SKELETON_CARDS;

fn picker_key() -> NftsKey {
    NftsKey {
        chains: vec!["eth-mainnet".to_string(), "base-mainnet".to_string()],
        address: VITALIK.to_string(),
    }
}

fn detail_key() -> NftKey {
    NftKey {
        chain: "eth-mainnet".to_string(),
        contract: "0xbd3531da5cf5857e7cfaa92426877b022e612cf8".to_string(),
        token_id: "6873".to_string(),
    }
}

fn picker_app(loader: Loader<NftsKey, Vec<ChainNfts>>) -> App {
    create_test_app(
        Some(View::NftPicker(NftPickerView {
            loader,
            selected_link: 0,
        })),
        true,
    )
}

fn detail_app(loader: Loader<NftKey, NftContractToken>) -> App {
    create_test_app(
        Some(View::NftDetail(NftDetailView {
            loader,
            selected_link: 0,
        })),
        true,
    )
}

#[test]
fn test_picker_loading_shows_eight_skeleton_cards() {
    let app = picker_app(loading(picker_key()));
    let buffer = render_to_buffer(&app, 100, 40);

    let skeleton_rows = buffer_to_string(&buffer)
        .lines()
        .filter(|line| line.contains("░░░░"))
        .count();
    assert_eq!(SKELETON_CARDS, 8);
    assert_eq!(skeleton_rows, SKELETON_CARDS);
}

#[test]
fn test_picker_empty_shows_no_results() {
    let app = picker_app(loaded(picker_key(), Vec::new()));
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "No results"));
}

#[test]
fn test_picker_shows_cards_with_chain_labels() {
    let app = picker_app(loaded(picker_key(), mock_nfts()));
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Pudgy Penguins #6873: Ethereum Mainnet"));
    assert!(buffer_contains(&buffer, "Pudgy Penguins #412"));
    assert!(buffer_contains(&buffer, "Based Ghouls #77: Base Mainnet"));
    assert!(!buffer_contains(&buffer, "No results"));
}

#[test]
fn test_picker_error() {
    let app = picker_app(failed(picker_key(), "Rate limited"));
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Rate limited"));
}

#[test]
fn test_picker_cards_link_to_detail() {
    let app = picker_app(loaded(picker_key(), mock_nfts()));
    let links = app.current_links();

    assert_eq!(links.len(), 3);
    match &links[2] {
        gtex::NavLink::Nft(nft) => {
            assert_eq!(nft.chain, "base-mainnet");
            assert_eq!(nft.token_id, "77");
        }
        other => panic!("expected NFT link, got {other:?}"),
    }
}

#[test]
fn test_detail_shows_title_image_and_attributes() {
    let app = detail_app(loaded(detail_key(), mock_nft_detail()));
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Pudgy Penguins #6873"));
    assert!(buffer_contains(&buffer, "https://img.example/6873-512.png"));
    assert!(buffer_contains(&buffer, "Body: Turtleneck"));
    assert!(buffer_contains(&buffer, "Face: Smile"));
}

#[test]
fn test_detail_error_shows_message_alone() {
    let app = detail_app(failed(detail_key(), "Token not found"));
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Token not found"));
    assert!(!buffer_contains(&buffer, "Attributes"));
    assert!(!buffer_contains(&buffer, "Image"));
}
