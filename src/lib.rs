//! gtex - GoldRush Terminal Explorer
//!
//! A terminal explorer for blocks, transactions, addresses and NFTs across
//! the chains served by the GoldRush (Covalent) API.

pub mod api;
pub mod app;
pub mod chains;
pub mod clipboard;
pub mod config;
pub mod context;
pub mod debounce;
pub mod loader;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiError, ExplorerApi, GoldRushClient};
pub use app::{App, AsyncMessage, NavLink, View};
pub use config::Config;
pub use context::ExplorerContext;
pub use loader::{LoadError, LoadState, Loader, Ticket};
pub use search::{classify, SearchKind, SearchQuery};
