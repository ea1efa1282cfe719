use gtex::app::{App, AsyncMessage, Focus};
use gtex::config::Config;
use gtex::context::ExplorerContext;
use gtex::ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::fs::OpenOptions;
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Environment variable holding the log filter, e.g. `GTEX_LOG=gtex=debug`
const LOG_ENV: &str = "GTEX_LOG";

/// gtex - GoldRush Terminal Explorer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Chain to search on, e.g. eth-mainnet
    #[arg(long)]
    chain: Option<String>,

    /// GoldRush API key (overrides config and GOLDRUSH_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Address, transaction hash or block height to open at startup
    query: Option<String>,
}

/// Log to a file next to the config; stdout belongs to the TUI
fn init_logging() -> Result<()> {
    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    let path = dir.join("gtex.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {path:?}"))?;

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow!(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {e:#}");
    }

    let mut config = Config::load()?;
    if let Some(chain) = args.chain {
        config.chain = chain;
    }
    let base_url = args
        .base_url
        .unwrap_or_else(|| config.effective_base_url().to_string());

    let ctx = match args.api_key.or_else(|| config.effective_api_key()) {
        Some(key) => match ExplorerContext::goldrush(&base_url, &key) {
            Ok(ctx) => Some(Arc::new(ctx)),
            Err(e) => {
                warn!("Could not create API client: {e}");
                None
            }
        },
        None => None,
    };

    info!(chain = %config.chain, %base_url, "Starting gtex");
    run_tui(config, ctx, base_url, args.query).await
}

async fn run_tui(
    config: Config,
    ctx: Option<Arc<ExplorerContext>>,
    base_url: String,
    query: Option<String>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);
    let mut app = App::new(config, ctx, tx);
    app.base_url = base_url;

    if let Some(query) = query {
        app.search_input = Input::new(query);
        app.submit_search();
    }

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            app.apply(msg);
        }

        app.tick(Instant::now());

        // Poll for input events
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, &ev);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: &KeyEvent, ev: &Event) {
    let now = Instant::now();

    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    if app.needs_api_key_setup() {
        match key.code {
            KeyCode::Enter => {
                if let Err(e) = app.submit_api_key() {
                    app.setup_error = Some(e);
                }
            }
            _ => {
                app.api_key_input.handle_event(ev);
            }
        }
        return;
    }

    if app.is_on_home() || app.focus == Focus::Search {
        match key.code {
            KeyCode::Enter => {
                app.submit_search();
            }
            KeyCode::Tab => app.cycle_chain(now),
            KeyCode::Up if app.is_on_home() => app.select_history_prev(),
            KeyCode::Down if app.is_on_home() => app.select_history_next(),
            KeyCode::Down => app.focus_results(),
            KeyCode::Delete | KeyCode::Backspace if app.selected_history_index.is_some() => {
                app.delete_selected_history();
            }
            _ => {
                if let Some(changed) = app.search_input.handle_event(ev) {
                    if changed.value {
                        app.on_search_edited(now);
                    }
                }
            }
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.follow_selected(),
        KeyCode::Tab => app.cycle_chain(now),
        KeyCode::Char('n') => app.open_nfts(),
        KeyCode::Char('t') => app.toggle_relative_time(),
        KeyCode::Char('c') => app.copy_selected(now),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        KeyCode::Char('h') => app.go_home(),
        _ => {}
    }
}
