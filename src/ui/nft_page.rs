use super::helper::*;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::{NftDetailView, NftPickerView};
use crate::chains::ChainRegistry;

/// Placeholder cards shown while the picker loads
pub const SKELETON_CARDS: usize = 8;

pub fn picker_lines(view: &NftPickerView, chains: &ChainRegistry) -> PageLines {
    let mut page = PageLines::new(view.selected_link);

    page.state(view.loader.state(), SKELETON_CARDS, |items, page| {
        let cards = items.iter().flat_map(|item| {
            item.collection
                .nft_data
                .iter()
                .filter_map(move |nft| nft.token_id.as_ref().map(|id| (item, id)))
        });

        let mut empty = true;
        for (item, token_id) in cards {
            empty = false;
            let name = item
                .collection
                .contract_name
                .as_deref()
                .unwrap_or("Unnamed collection");
            page.link(
                &format!("{name} #{token_id}"),
                chains.label(&item.chain_name),
            );
        }

        if empty {
            page.push(Line::from(Span::styled(
                "No results",
                Style::default().fg(Color::DarkGray),
            )));
        }
    });

    page
}

pub fn detail_lines(view: &NftDetailView) -> PageLines {
    let mut page = PageLines::new(view.selected_link);

    page.state(view.loader.state(), 4, |token, page| {
        let name = token.contract_name.as_deref().unwrap_or("Unnamed collection");
        let token_id = token.nft_data.token_id.as_deref().unwrap_or("?");
        page.push(Line::from(Span::styled(
            format!("{name} #{token_id}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        if let Some(title) = token
            .nft_data
            .external_data
            .as_ref()
            .and_then(|d| d.name.as_deref())
        {
            page.kv("Name", title);
        }
        page.link("Contract", &token.contract_address);
        page.kv("Image", token.nft_data.image_url().unwrap_or("N/A"));
        if let Some(owner) = &token.nft_data.original_owner {
            page.kv("Original Owner", owner);
        }

        let attributes = token
            .nft_data
            .external_data
            .as_ref()
            .map(|d| d.attributes.as_slice())
            .unwrap_or_default();
        if !attributes.is_empty() {
            page.blank();
            page.push(Line::from(Span::styled(
                "Attributes",
                Style::default().fg(Color::Yellow),
            )));
            for attr in attributes {
                page.kv(
                    attr.trait_type.as_deref().unwrap_or("trait"),
                    &attr.display_value(),
                );
            }
        }
    });

    page
}

pub fn draw_nft_picker(
    frame: &mut Frame,
    area: Rect,
    view: &NftPickerView,
    chains: &ChainRegistry,
) {
    let title = match view.loader.key() {
        Some(key) => format!("🖼 NFTs for {}", truncate(&key.address)),
        None => "🖼 NFTs".to_string(),
    };
    draw_page(frame, area, &title, Color::Magenta, picker_lines(view, chains));
}

pub fn draw_nft_detail(frame: &mut Frame, area: Rect, view: &NftDetailView) {
    let title = match view.loader.key() {
        Some(key) => format!("🖼 NFT #{}", key.token_id),
        None => "🖼 NFT".to_string(),
    };
    draw_page(frame, area, &title, Color::Magenta, detail_lines(view));
}
