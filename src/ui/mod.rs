mod address_page;
mod block_page;
mod helper;
mod nft_page;
mod tx_page;

pub use helper::{format_thousands, pretty_balance, truncate};
pub use nft_page::SKELETON_CARDS;

use address_page::draw_address_view;
use block_page::draw_block_view;
use helper::*;
use nft_page::{draw_nft_detail, draw_nft_picker};
use tx_page::draw_tx_view;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_input::Input;

use crate::app::{App, Focus, View};

const TITLE_ART: &str = r#"
 ██████╗ ████████╗███████╗██╗  ██╗
██╔════╝ ╚══██╔══╝██╔════╝╚██╗██╔╝
██║  ███╗   ██║   █████╗   ╚███╔╝
██║   ██║   ██║   ██╔══╝   ██╔██╗
╚██████╔╝   ██║   ███████╗██╔╝ ██╗
 ╚═════╝    ╚═╝   ╚══════╝╚═╝  ╚═╝
"#;

const SEARCH_PLACEHOLDER: &str = "Search by Address / Txn Hash / Block";

const NAV_HELP: &str =
    "↑↓ select • Enter open • n NFTs • t time • c copy • r reload • b back • h home • / search • Esc quit";
const NAV_HELP_SEARCH: &str = "Enter search • ↓ results • Tab chain • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.needs_api_key_setup() {
        draw_api_key_setup(frame, app, area);
    } else if app.is_on_home() {
        draw_search_home(frame, app, area);
    } else {
        draw_results(frame, app, area);
    }
}

fn draw_title(frame: &mut Frame, title_area: Rect, subtitle_area: Rect) {
    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let subtitle = Paragraph::new("GoldRush Terminal Explorer")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, subtitle_area);
}

fn draw_api_key_setup(frame: &mut Frame, app: &App, area: Rect) {
    let [title, subtitle, _, label, input, status, _] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    draw_title(frame, title, subtitle);

    let prompt = Paragraph::new("Enter your GoldRush API key (or set GOLDRUSH_API_KEY):")
        .fg(Color::White)
        .alignment(Alignment::Center);
    frame.render_widget(prompt, label);

    draw_input(
        frame,
        centered_rect(70, input),
        InputBox {
            input: &app.api_key_input,
            title: " 🔑 API Key Required ",
            placeholder: "cqt_...",
            masked: true,
            focused: true,
        },
    );

    let status_line = match &app.setup_error {
        Some(err) => Line::from(err.as_str()).fg(Color::Red),
        None => Line::from("Press Enter to save • Esc to quit").fg(Color::DarkGray),
    };
    frame.render_widget(Paragraph::new(status_line).alignment(Alignment::Center), status);
}

/// A bordered single-line text field
struct InputBox<'a> {
    input: &'a Input,
    title: &'a str,
    placeholder: &'a str,
    masked: bool,
    focused: bool,
}

fn draw_input(frame: &mut Frame, area: Rect, field: InputBox) {
    let accent = if field.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(field.title)
        .title_style(Style::default().fg(accent));

    let inner = block.inner(area);
    let scroll = field.input.visual_scroll(inner.width as usize);
    let value = field.input.value();

    let text = match (value.is_empty(), field.masked) {
        (true, _) => Span::styled(field.placeholder, Style::default().fg(Color::DarkGray)),
        (false, true) => Span::raw("•".repeat(value.chars().count())).fg(Color::White),
        (false, false) => Span::raw(value).fg(Color::White),
    };
    frame.render_widget(
        Paragraph::new(text).block(block).scroll((0, scroll as u16)),
        area,
    );

    if field.focused {
        let offset = field.input.visual_cursor().saturating_sub(scroll) as u16;
        if offset < inner.width {
            frame.set_cursor_position((inner.x + offset, inner.y));
        }
    }
}

fn chain_selector_line(app: &App) -> Line<'static> {
    let color = app
        .chains()
        .find(app.selected_chain())
        .map(|c| c.color())
        .unwrap_or(Color::White);

    Line::from(vec![
        Span::styled("Chain: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.selected_chain_label().to_string(),
            Style::default().fg(color).bold(),
        ),
        Span::styled("  (Tab to change)", Style::default().fg(Color::DarkGray)),
    ])
}

fn draw_search_home(frame: &mut Frame, app: &App, area: Rect) {
    let recent_searches = app.get_recent_searches();
    let has_history = !recent_searches.is_empty();

    // Calculate history section height (max 5 items + 2 for border)
    let history_height = if has_history {
        (recent_searches.len().min(5) + 2) as u16
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(9),              // Title
        Constraint::Length(1),              // Subtitle
        Constraint::Length(2),              // Spacing
        Constraint::Length(1),              // Chain selector
        Constraint::Length(3),              // Search bar
        Constraint::Length(1),              // Spacing
        Constraint::Length(history_height), // History
        Constraint::Length(1),              // Spacing
        Constraint::Length(1),              // API status
        Constraint::Length(1),              // Help
        Constraint::Min(0),                 // Padding
    ])
    .split(area);

    draw_title(frame, chunks[0], chunks[1]);

    let selector = Paragraph::new(chain_selector_line(app)).alignment(Alignment::Center);
    frame.render_widget(selector, chunks[3]);

    let search_area = centered_rect(60, chunks[4]);
    let search_selected = app.selected_history_index.is_none();
    draw_search_bar(frame, app, search_area, search_selected);

    if has_history {
        let history_area = centered_rect(60, chunks[6]);
        draw_history_list(frame, app, history_area);
    }

    let api_status = Line::from(vec![
        Span::styled("API: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.base_url.clone(), Style::default().fg(Color::Green)),
    ]);
    let api_widget = Paragraph::new(api_status).alignment(Alignment::Center);
    frame.render_widget(api_widget, chunks[8]);

    let help_text = if has_history {
        "Enter search • ↑↓ history • Del remove • Tab chain • Esc quit"
    } else {
        "Enter to search • Tab chain • Esc to quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[9]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, focused: bool) {
    draw_input(
        frame,
        area,
        InputBox {
            input: &app.search_input,
            title: " 🔍 Search ",
            placeholder: SEARCH_PLACEHOLDER,
            masked: false,
            focused,
        },
    );
}

fn draw_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let recent_searches = app.get_recent_searches();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent Searches ");

    let items: Vec<ListItem> = recent_searches
        .iter()
        .enumerate()
        .take(5)
        .map(|(i, query)| {
            let is_selected = app.selected_history_index == Some(i);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(format!(" {}", truncate(query))).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let padded = padded_rect(area, 1);
    let chunks = Layout::vertical([
        Constraint::Length(1), // Chain selector
        Constraint::Length(3), // Search bar
        Constraint::Min(5),    // View
        Constraint::Length(1), // Help or toast
    ])
    .split(padded);

    frame.render_widget(Paragraph::new(chain_selector_line(app)), chunks[0]);
    draw_search_bar(frame, app, chunks[1], app.focus == Focus::Search);

    let chains = app.chains();
    match &app.view {
        Some(View::Block(view)) => draw_block_view(frame, chunks[2], view),
        Some(View::Transaction(view)) => draw_tx_view(frame, chunks[2], view, chains),
        Some(View::Address(view)) => draw_address_view(frame, chunks[2], view, chains),
        Some(View::NftPicker(view)) => draw_nft_picker(frame, chunks[2], view, chains),
        Some(View::NftDetail(view)) => draw_nft_detail(frame, chunks[2], view),
        Some(View::NotFound(reason)) => draw_not_found(frame, chunks[2], reason),
        None => {}
    }

    let footer = match app.toast_message() {
        Some(msg) => Line::from(msg.to_string()).fg(Color::Green).bold(),
        None => {
            let help = if app.focus == Focus::Search {
                NAV_HELP_SEARCH
            } else {
                NAV_HELP
            };
            Line::from(help).fg(Color::DarkGray)
        }
    };
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[3]);
}

fn draw_not_found(frame: &mut Frame, area: Rect, reason: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Search ");

    let lines = vec![
        Line::from("not found").fg(Color::Red),
        Line::from(reason.to_string()).fg(Color::DarkGray),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
