use super::helper::*;

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::TxView;
use crate::chains::ChainRegistry;

const SKELETON_ROWS: usize = 10;

fn with_label(address: &str, label: Option<&str>) -> String {
    match label {
        Some(name) => format!("{name} ({address})"),
        None => address.to_string(),
    }
}

pub fn tx_lines(view: &TxView, chains: &ChainRegistry) -> PageLines {
    let mut page = PageLines::new(view.selected_link);
    let Some(key) = view.loader.key() else {
        page.skeleton(SKELETON_ROWS);
        return page;
    };

    page.push(Line::from(Span::styled(
        "Transaction Receipt",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    page.push(Line::from(Span::styled(
        truncate(&key.hash),
        Style::default().fg(Color::Gray),
    )));
    page.blank();

    page.state(view.loader.state(), SKELETON_ROWS, |tx, page| {
        let ticker = tx
            .native_ticker()
            .unwrap_or_else(|| chains.native_ticker(&key.chain))
            .to_string();
        let decimals = tx.native_decimals();

        page.kv("Chain", chains.label(&key.chain));
        let time = if view.relative_time {
            format_relative(&tx.block_signed_at, Utc::now())
        } else {
            format_descriptive(&tx.block_signed_at)
        };
        page.kv("Transaction Time", &format!("{time}  (t to toggle)"));
        page.push(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            if tx.successful {
                Span::styled("✓ Success", Style::default().fg(Color::Green))
            } else {
                Span::styled("✗ Failed", Style::default().fg(Color::Red))
            },
        ]));
        page.blank();

        page.link(
            "Address",
            &with_label(&tx.from_address, tx.from_address_label.as_deref()),
        );
        match &tx.to_address {
            Some(to) => page.link(
                "Interacted with",
                &with_label(to, tx.to_address_label.as_deref()),
            ),
            None => page.kv("Interacted with", "Contract Creation"),
        }
        if let Some(height) = tx.block_height {
            page.link("Block", &format!("#{}", format_thousands(height)));
        }
        page.blank();

        page.kv(
            "Transaction Fee",
            &format!(
                "{} {ticker} {}",
                pretty_balance(tx.fees_paid.as_deref(), decimals, 4),
                tx.pretty_gas_quote.as_deref().unwrap_or("")
            )
            .trim_end(),
        );
        page.kv(
            "Exchange Rate",
            &format!("1 USD = {} {ticker}", tx.usd_exchange_rate()),
        );
        page.kv(
            "Gas Price",
            &format!(
                "{} {ticker}",
                pretty_balance(tx.gas_price.as_deref(), decimals, 10)
            ),
        );

        for explorer in &tx.explorers {
            let label = explorer.label.as_deref().unwrap_or("explorer");
            page.kv(&format!("View on {label}"), &explorer.url);
        }

        if !tx.log_events.is_empty() {
            page.blank();
            page.push(Line::from(Span::styled(
                format!("Events ({})", tx.log_events.len()),
                Style::default().fg(Color::Yellow),
            )));
        }
        for log in &tx.log_events {
            let name = log
                .decoded
                .as_ref()
                .map(|d| d.name.as_str())
                .unwrap_or("Unknown event");
            match &log.sender_address {
                Some(sender) => {
                    let sender = with_label(sender, log.sender_name.as_deref());
                    page.link(name, &sender);
                }
                None => page.kv(name, "unknown sender"),
            }
            for param in log.decoded.iter().flat_map(|d| &d.params) {
                page.kv(&format!("    {}", param.name), &param.display_value());
            }
        }
    });

    page
}

pub fn draw_tx_view(frame: &mut Frame, area: Rect, view: &TxView, chains: &ChainRegistry) {
    let title = match view.loader.state().value() {
        Some(tx) if tx.successful => "📄 Transaction (✓ Success)",
        Some(_) => "📄 Transaction (✗ Failed)",
        None => "📄 Transaction",
    };
    draw_page(frame, area, title, Color::Cyan, tx_lines(view, chains));
}
