use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::loader::{ErrorKind, LoadError, LoadState};

const SKELETON: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";

// ============================================================================
// Formatting
// ============================================================================

/// Shorten long hashes and addresses to `0xd8da...6045`
pub fn truncate(text: &str) -> String {
    let len = text.chars().count();
    if len <= 13 {
        return text.to_string();
    }
    let head: String = text.chars().take(6).collect();
    let tail: String = text.chars().skip(len - 4).collect();
    format!("{head}...{tail}")
}

/// `19575410` -> `19,575,410`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_descriptive(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d %Y at %H:%M:%S UTC").to_string()
}

pub fn format_relative(ts: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs_ago = (now - *ts).num_seconds().max(0);

    if secs_ago < 60 {
        format!("{secs_ago} secs ago")
    } else if secs_ago < 3600 {
        format!("{} mins ago", secs_ago / 60)
    } else if secs_ago < 86400 {
        format!("{} hours ago", secs_ago / 3600)
    } else {
        format!("{} days ago", secs_ago / 86400)
    }
}

/// Scale a raw integer amount by `decimals` and round to `places` digits.
///
/// Unparseable input renders as zero; an amount too large to scale
/// renders as `?`.
pub fn pretty_balance(raw: Option<&str>, decimals: u8, places: usize) -> String {
    let amount = raw
        .and_then(|r| U256::from_str_radix(r.trim(), 10).ok())
        .unwrap_or(U256::ZERO);
    let ten = U256::from(10u64);

    let (Some(rounded), Some(scale)) = (
        scale_amount(amount, decimals as usize, places),
        ten.checked_pow(U256::from(places)),
    ) else {
        return "?".to_string();
    };
    let whole = rounded / scale;

    if places == 0 {
        return whole.to_string();
    }
    let frac = (rounded % scale).to_string();
    format!("{whole}.{frac:0>places$}")
}

/// `amount / 10^decimals` rounded half-up to `places` digits, as an integer
/// count of `10^-places` units
fn scale_amount(amount: U256, decimals: usize, places: usize) -> Option<U256> {
    let ten = U256::from(10u64);

    if places >= decimals {
        let factor = ten.checked_pow(U256::from(places - decimals))?;
        return amount.checked_mul(factor);
    }

    // A divisor past U256::MAX exceeds twice any amount, so it rounds to zero
    let Some(divisor) = ten.checked_pow(U256::from(decimals - places)) else {
        return Some(U256::ZERO);
    };
    let (quotient, remainder) = amount.div_rem(divisor);
    if remainder >= divisor - remainder {
        Some(quotient + U256::from(1u64))
    } else {
        Some(quotient)
    }
}

// ============================================================================
// Lines
// ============================================================================

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_kv_link(key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), style),
    ])
}

pub fn skeleton_line() -> Line<'static> {
    Line::from(Span::styled(SKELETON, Style::default().fg(Color::DarkGray)))
}

pub fn error_line(err: &LoadError) -> Line<'static> {
    let color = match err.kind {
        ErrorKind::Remote => Color::Yellow,
        ErrorKind::Transport => Color::Red,
    };
    Line::from(Span::styled(err.message.clone(), Style::default().fg(color)))
}

/// Lines of a result page, tracking which of them are selectable links.
///
/// Links are numbered in push order, which must match the order of
/// `View::links` for the same view.
pub struct PageLines {
    lines: Vec<Line<'static>>,
    selected: usize,
    next_link: usize,
    selected_line: Option<usize>,
}

impl PageLines {
    pub fn new(selected: usize) -> Self {
        Self {
            lines: Vec::new(),
            selected,
            next_link: 0,
            selected_line: None,
        }
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    pub fn kv(&mut self, key: &str, value: &str) {
        self.lines.push(format_kv(key, value));
    }

    pub fn link(&mut self, key: &str, value: &str) {
        let selected = self.next_link == self.selected;
        if selected {
            self.selected_line = Some(self.lines.len());
        }
        self.next_link += 1;
        self.lines.push(format_kv_link(key, value, selected));
    }

    pub fn skeleton(&mut self, rows: usize) {
        self.lines.extend((0..rows).map(|_| skeleton_line()));
    }

    /// The three render branches every view shares: placeholder rows while
    /// pending, the error text on failure, `content` once loaded
    pub fn state<T>(
        &mut self,
        state: &LoadState<T>,
        skeleton_rows: usize,
        content: impl FnOnce(&T, &mut Self),
    ) {
        match state {
            LoadState::Idle | LoadState::Loading => self.skeleton(skeleton_rows),
            LoadState::Failed(err) => self.push(error_line(err)),
            LoadState::Loaded(value) => content(value, self),
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Vertical scroll keeping the selected link inside `height` rows
    pub fn scroll_for(&self, height: u16) -> u16 {
        let height = height.max(1) as usize;
        match self.selected_line {
            Some(line) if line >= height => (line + 1 - height) as u16,
            _ => 0,
        }
    }
}

/// Render `page` inside a titled, bordered box
pub fn draw_page(frame: &mut Frame, area: Rect, title: &str, border: Color, page: PageLines) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {title} "));

    let inner = block.inner(area);
    let scroll = page.scroll_for(inner.height);
    let paragraph = Paragraph::new(page.lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Layout
// ============================================================================

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
