use super::helper::*;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::BlockView;

const SKELETON_ROWS: usize = 8;
const TX_SKELETON_ROWS: usize = 5;

pub fn block_lines(view: &BlockView) -> PageLines {
    let mut page = PageLines::new(view.selected_link);

    page.state(view.loader.state(), SKELETON_ROWS, |block, page| {
        page.kv("Height", &format_thousands(block.height));
        page.kv("Signed At", &format_descriptive(&block.signed_at));
        page.kv("Block Hash", &block.block_hash);

        let pct = block.gas_used_pct();
        page.push(Line::from(vec![
            Span::styled("Gas Used: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_thousands(block.gas_used),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {pct:.2}%"),
                Style::default().fg(if pct > 90.0 {
                    Color::Red
                } else if pct > 70.0 {
                    Color::Yellow
                } else {
                    Color::Green
                }),
            ),
        ]));
        page.kv("Gas Limit", &format_thousands(block.gas_limit));

        match &block.miner_address {
            Some(miner) => page.link("Miner Address", miner),
            None => page.kv("Miner Address", "N/A"),
        }

        let parent = block.block_parent_hash.as_deref().unwrap_or("N/A");
        if block.height > 0 {
            page.link("Block Parent Hash", parent);
        } else {
            page.kv("Block Parent Hash", parent);
        }

        page.kv("Extra Data", block.extra_data.as_deref().unwrap_or(""));
    });

    page.blank();
    let heading = match view.txs.state().value() {
        Some(txs) => format!("Transactions ({})", txs.len()),
        None => "Transactions".to_string(),
    };
    page.push(Line::from(Span::styled(
        heading,
        Style::default().fg(Color::Yellow),
    )));
    page.state(view.txs.state(), TX_SKELETON_ROWS, |txs, page| {
        if txs.is_empty() {
            page.push(Line::from(Span::styled(
                "No transactions in this block",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for (i, tx) in txs.iter().enumerate() {
            let to = tx
                .to_address
                .as_deref()
                .map(truncate)
                .unwrap_or_else(|| "Contract Creation".to_string());
            let status = if tx.successful { "✓" } else { "✗" };
            page.link(
                &format!("{:>3}", i + 1),
                &format!(
                    "{} {status} {} → {to}",
                    truncate(&tx.tx_hash),
                    truncate(&tx.from_address)
                ),
            );
        }
    });

    page
}

pub fn draw_block_view(frame: &mut Frame, area: Rect, view: &BlockView) {
    let title = match view.loader.key() {
        Some(key) => format!("📦 Block #{}", format_thousands(key.height)),
        None => "📦 Block".to_string(),
    };
    draw_page(frame, area, &title, Color::Cyan, block_lines(view));
}
