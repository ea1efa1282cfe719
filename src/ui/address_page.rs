use super::helper::*;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::AddressView;
use crate::chains::ChainRegistry;

const SKELETON_ROWS: usize = 6;

pub fn address_lines(view: &AddressView, chains: &ChainRegistry) -> PageLines {
    let mut page = PageLines::new(view.selected_link);
    let Some(key) = view.loader.key() else {
        page.skeleton(SKELETON_ROWS);
        return page;
    };

    page.push(Line::from(vec![
        Span::styled("Address: ", Style::default().fg(Color::DarkGray)),
        Span::styled(truncate(&key.address), Style::default().fg(Color::White)),
        Span::styled("  (c to copy)", Style::default().fg(Color::DarkGray)),
    ]));
    page.kv("Chain", chains.label(&key.chain));
    page.link("NFTs", "View NFTs across chains (n)");
    page.blank();
    page.push(Line::from(Span::styled(
        "Token Balances",
        Style::default().fg(Color::Yellow),
    )));

    page.state(view.loader.state(), SKELETON_ROWS, |balances, page| {
        if balances.is_empty() {
            page.push(Line::from(Span::styled(
                "No token balances",
                Style::default().fg(Color::DarkGray),
            )));
            return;
        }

        for token in balances {
            let ticker = token.contract_ticker_symbol.as_deref().unwrap_or("???");
            let amount = format!(
                "{} {}",
                pretty_balance(token.balance.as_deref(), token.contract_decimals.unwrap_or(0), 4),
                token.pretty_quote.as_deref().unwrap_or("")
            );
            let amount = amount.trim_end();

            match token.contract_address.as_deref() {
                Some(_) if !token.native_token => page.link(ticker, amount),
                _ => page.kv(ticker, amount),
            }
        }
    });

    page
}

pub fn draw_address_view(
    frame: &mut Frame,
    area: Rect,
    view: &AddressView,
    chains: &ChainRegistry,
) {
    let title = match view.loader.key() {
        Some(key) => format!("👤 Address {}", truncate(&key.address)),
        None => "👤 Address".to_string(),
    };
    draw_page(frame, area, &title, Color::Cyan, address_lines(view, chains));
}
