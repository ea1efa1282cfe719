use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tui_input::Input;

use crate::api::{
    fetch_nft_detail, fetch_nfts_across_chains, Block, ChainNfts, NftContractToken, TokenBalance,
    Transaction,
};
use crate::chains::ChainRegistry;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::context::ExplorerContext;
use crate::debounce::Debouncer;
use crate::loader::{LoadError, Loader, Ticket};
use crate::search::SearchQuery;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// ============================================================================
// Resource Keys
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockKey {
    pub chain: String,
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxKey {
    pub chain: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressKey {
    pub chain: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftsKey {
    pub chains: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftKey {
    pub chain: String,
    pub contract: String,
    pub token_id: String,
}

/// Navigable target of a search or a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLink {
    Address(AddressKey),
    Block(BlockKey),
    Transaction(TxKey),
    Nfts(NftsKey),
    Nft(NftKey),
}

impl NavLink {
    /// Text placed on the clipboard for this link
    pub fn copy_text(&self) -> String {
        match self {
            Self::Address(key) => key.address.clone(),
            Self::Block(key) => key.height.to_string(),
            Self::Transaction(key) => key.hash.clone(),
            Self::Nfts(key) => key.address.clone(),
            Self::Nft(key) => key.contract.clone(),
        }
    }

    fn is_address(&self) -> bool {
        matches!(self, Self::Address(_) | Self::Nfts(_) | Self::Nft(_))
    }
}

/// Results from spawned fetches, tagged with the ticket that started them
#[derive(Debug)]
pub enum AsyncMessage {
    Block(Ticket, Result<Block, LoadError>),
    BlockTransactions(Ticket, Result<Vec<Transaction>, LoadError>),
    Transaction(Ticket, Result<Transaction, LoadError>),
    Balances(Ticket, Result<Vec<TokenBalance>, LoadError>),
    Nfts(Ticket, Result<Vec<ChainNfts>, LoadError>),
    NftDetail(Ticket, Result<NftContractToken, LoadError>),
}

// ============================================================================
// Views
// ============================================================================

#[derive(Debug, Default)]
pub struct BlockView {
    pub loader: Loader<BlockKey, Block>,
    /// Transactions in the block, loaded alongside the header
    pub txs: Loader<BlockKey, Vec<Transaction>>,
    pub selected_link: usize,
}

#[derive(Debug, Default)]
pub struct TxView {
    pub loader: Loader<TxKey, Transaction>,
    pub selected_link: usize,
    pub relative_time: bool,
}

#[derive(Debug, Default)]
pub struct AddressView {
    pub loader: Loader<AddressKey, Vec<TokenBalance>>,
    pub selected_link: usize,
}

#[derive(Debug, Default)]
pub struct NftPickerView {
    pub loader: Loader<NftsKey, Vec<ChainNfts>>,
    pub selected_link: usize,
}

#[derive(Debug, Default)]
pub struct NftDetailView {
    pub loader: Loader<NftKey, NftContractToken>,
    pub selected_link: usize,
}

#[derive(Debug)]
pub enum View {
    Block(BlockView),
    Transaction(TxView),
    Address(AddressView),
    NftPicker(NftPickerView),
    NftDetail(NftDetailView),
    NotFound(String),
}

impl View {
    fn for_link(link: &NavLink) -> Self {
        match link {
            NavLink::Address(_) => Self::Address(AddressView::default()),
            NavLink::Block(_) => Self::Block(BlockView::default()),
            NavLink::Transaction(_) => Self::Transaction(TxView::default()),
            NavLink::Nfts(_) => Self::NftPicker(NftPickerView::default()),
            NavLink::Nft(_) => Self::NftDetail(NftDetailView::default()),
        }
    }

    /// The link that produced this view, rebuilt from its loader key
    pub fn current_link(&self) -> Option<NavLink> {
        match self {
            Self::Block(v) => v.loader.key().cloned().map(NavLink::Block),
            Self::Transaction(v) => v.loader.key().cloned().map(NavLink::Transaction),
            Self::Address(v) => v.loader.key().cloned().map(NavLink::Address),
            Self::NftPicker(v) => v.loader.key().cloned().map(NavLink::Nfts),
            Self::NftDetail(v) => v.loader.key().cloned().map(NavLink::Nft),
            Self::NotFound(_) => None,
        }
    }

    pub fn shows(&self, link: &NavLink) -> bool {
        self.current_link().as_ref() == Some(link)
    }

    /// Links the user can select, in display order
    pub fn links(&self, nft_chains: &[String]) -> Vec<NavLink> {
        match self {
            Self::Block(v) => {
                let Some(key) = v.loader.key() else {
                    return Vec::new();
                };
                let mut links = Vec::new();
                if let Some(block) = v.loader.state().value() {
                    if let Some(miner) = &block.miner_address {
                        links.push(NavLink::Address(AddressKey {
                            chain: key.chain.clone(),
                            address: miner.clone(),
                        }));
                    }
                    if block.height > 0 {
                        links.push(NavLink::Block(BlockKey {
                            chain: key.chain.clone(),
                            height: block.height - 1,
                        }));
                    }
                }
                if let Some(txs) = v.txs.state().value() {
                    links.extend(txs.iter().map(|tx| {
                        NavLink::Transaction(TxKey {
                            chain: key.chain.clone(),
                            hash: tx.tx_hash.clone(),
                        })
                    }));
                }
                links
            }
            Self::Transaction(v) => {
                let (Some(key), Some(tx)) = (v.loader.key(), v.loader.state().value()) else {
                    return Vec::new();
                };
                let address = |a: &str| {
                    NavLink::Address(AddressKey {
                        chain: key.chain.clone(),
                        address: a.to_string(),
                    })
                };
                let mut links = vec![address(&tx.from_address)];
                if let Some(to) = &tx.to_address {
                    links.push(address(to));
                }
                if let Some(height) = tx.block_height {
                    links.push(NavLink::Block(BlockKey {
                        chain: key.chain.clone(),
                        height,
                    }));
                }
                links.extend(
                    tx.log_events
                        .iter()
                        .filter_map(|log| log.sender_address.as_deref())
                        .map(address),
                );
                links
            }
            Self::Address(v) => {
                let Some(key) = v.loader.key() else {
                    return Vec::new();
                };
                let mut links = vec![NavLink::Nfts(NftsKey {
                    chains: nft_chains.to_vec(),
                    address: key.address.clone(),
                })];
                if let Some(balances) = v.loader.state().value() {
                    links.extend(
                        balances
                            .iter()
                            .filter(|b| !b.native_token)
                            .filter_map(|b| b.contract_address.as_deref())
                            .map(|contract| {
                                NavLink::Address(AddressKey {
                                    chain: key.chain.clone(),
                                    address: contract.to_string(),
                                })
                            }),
                    );
                }
                links
            }
            Self::NftPicker(v) => {
                let Some(items) = v.loader.state().value() else {
                    return Vec::new();
                };
                items
                    .iter()
                    .flat_map(|item| {
                        item.collection.nft_data.iter().filter_map(move |nft| {
                            nft.token_id.as_ref().map(|token_id| {
                                NavLink::Nft(NftKey {
                                    chain: item.chain_name.clone(),
                                    contract: item.collection.contract_address.clone(),
                                    token_id: token_id.clone(),
                                })
                            })
                        })
                    })
                    .collect()
            }
            Self::NftDetail(v) => {
                let (Some(key), Some(token)) = (v.loader.key(), v.loader.state().value()) else {
                    return Vec::new();
                };
                vec![NavLink::Address(AddressKey {
                    chain: key.chain.clone(),
                    address: token.contract_address.clone(),
                })]
            }
            Self::NotFound(_) => Vec::new(),
        }
    }

    pub fn selected_link(&self) -> usize {
        match self {
            Self::Block(v) => v.selected_link,
            Self::Transaction(v) => v.selected_link,
            Self::Address(v) => v.selected_link,
            Self::NftPicker(v) => v.selected_link,
            Self::NftDetail(v) => v.selected_link,
            Self::NotFound(_) => 0,
        }
    }

    fn selected_link_mut(&mut self) -> Option<&mut usize> {
        match self {
            Self::Block(v) => Some(&mut v.selected_link),
            Self::Transaction(v) => Some(&mut v.selected_link),
            Self::Address(v) => Some(&mut v.selected_link),
            Self::NftPicker(v) => Some(&mut v.selected_link),
            Self::NftDetail(v) => Some(&mut v.selected_link),
            Self::NotFound(_) => None,
        }
    }

    /// Identifier copied when no link is selected
    pub fn primary_text(&self) -> Option<String> {
        match self {
            Self::Block(v) => v
                .loader
                .state()
                .value()
                .map(|b| b.block_hash.clone())
                .or_else(|| v.loader.key().map(|k| k.height.to_string())),
            Self::Transaction(v) => v.loader.key().map(|k| k.hash.clone()),
            Self::Address(v) => v.loader.key().map(|k| k.address.clone()),
            Self::NftPicker(v) => v.loader.key().map(|k| k.address.clone()),
            Self::NftDetail(v) => v.loader.key().map(|k| k.contract.clone()),
            Self::NotFound(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Block(v) => v.loader.state().is_pending() || v.txs.state().is_pending(),
            Self::Transaction(v) => v.loader.state().is_pending(),
            Self::Address(v) => v.loader.state().is_pending(),
            Self::NftPicker(v) => v.loader.state().is_pending(),
            Self::NftDetail(v) => v.loader.state().is_pending(),
            Self::NotFound(_) => false,
        }
    }
}

/// Hand `result` to whichever loader issued `ticket`
macro_rules! route {
    ($views:expr, $variant:ident, $ticket:expr, $result:expr) => {
        route!($views, $variant.loader, $ticket, $result)
    };
    ($views:expr, $variant:ident . $field:ident, $ticket:expr, $result:expr) => {{
        let loader = $views.find_map(|view| match view {
            View::$variant(v) if v.$field.is_current($ticket) => Some(&mut v.$field),
            _ => None,
        });
        match loader {
            Some(loader) => loader.resolve($ticket, $result),
            None => {
                debug!(ticket = ?$ticket, "No view waiting for response, dropping");
                false
            }
        }
    }};
}

/// Spawn the fetch for `link` into `view`'s loader.
///
/// `force` restarts even when the view already holds this key.
fn start_load(
    ctx: Option<&ExplorerContext>,
    tx: &mpsc::Sender<AsyncMessage>,
    view: &mut View,
    link: NavLink,
    force: bool,
) {
    let Some(ctx) = ctx else {
        fail_unconfigured(view, link);
        return;
    };
    if !force && view.shows(&link) {
        return;
    }

    let api = ctx.api();
    let tx = tx.clone();

    match (view, link) {
        (View::Block(v), NavLink::Block(key)) => {
            let k = key.clone();
            let txs_api = Arc::clone(&api);
            v.loader.start(
                key.clone(),
                async move { api.get_block(&k.chain, &k.height.to_string()).await },
                tx.clone(),
                AsyncMessage::Block,
            );
            let k = key.clone();
            v.txs.start(
                key,
                async move { txs_api.get_block_transactions(&k.chain, k.height).await },
                tx,
                AsyncMessage::BlockTransactions,
            );
        }
        (View::Transaction(v), NavLink::Transaction(key)) => {
            let k = key.clone();
            v.loader.start(
                key,
                async move { api.get_transaction(&k.chain, &k.hash).await },
                tx,
                AsyncMessage::Transaction,
            );
        }
        (View::Address(v), NavLink::Address(key)) => {
            let k = key.clone();
            v.loader.start(
                key,
                async move { api.get_token_balances(&k.chain, &k.address).await },
                tx,
                AsyncMessage::Balances,
            );
        }
        (View::NftPicker(v), NavLink::Nfts(key)) => {
            let k = key.clone();
            v.loader.start(
                key,
                async move {
                    Ok::<_, LoadError>(
                        fetch_nfts_across_chains(api.as_ref(), &k.chains, &k.address).await,
                    )
                },
                tx,
                AsyncMessage::Nfts,
            );
        }
        (View::NftDetail(v), NavLink::Nft(key)) => {
            let k = key.clone();
            v.loader.start(
                key,
                async move { fetch_nft_detail(api.as_ref(), &k.chain, &k.contract, &k.token_id).await },
                tx,
                AsyncMessage::NftDetail,
            );
        }
        (_, link) => warn!(?link, "Link does not match the view it was opened in"),
    }
}

/// Without an API client every load fails straight away
fn fail_unconfigured(view: &mut View, link: NavLink) {
    let err = || LoadError::remote("API key not configured");
    match (view, link) {
        (View::Block(v), NavLink::Block(key)) => {
            let t = v.loader.request(key.clone());
            v.loader.resolve(t, Err(err()));
            let t = v.txs.request(key);
            v.txs.resolve(t, Err(err()));
        }
        (View::Transaction(v), NavLink::Transaction(key)) => {
            let t = v.loader.request(key);
            v.loader.resolve(t, Err(err()));
        }
        (View::Address(v), NavLink::Address(key)) => {
            let t = v.loader.request(key);
            v.loader.resolve(t, Err(err()));
        }
        (View::NftPicker(v), NavLink::Nfts(key)) => {
            let t = v.loader.request(key);
            v.loader.resolve(t, Err(err()));
        }
        (View::NftDetail(v), NavLink::Nft(key)) => {
            let t = v.loader.request(key);
            v.loader.resolve(t, Err(err()));
        }
        _ => {}
    }
}

// ============================================================================
// App
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
}

pub struct App {
    pub config: Config,
    pub ctx: Option<Arc<ExplorerContext>>,
    pub base_url: String,
    tx: mpsc::Sender<AsyncMessage>,
    pub search_input: Input,
    pub api_key_input: Input,
    pub setup_error: Option<String>,
    pub selected_history_index: Option<usize>,
    pub focus: Focus,
    pub view: Option<View>,
    pub history: Vec<View>,
    pub debouncer: Debouncer,
    pub toast: Option<(String, Instant)>,
    pub should_quit: bool,
    default_chains: ChainRegistry,
    clipboard: SystemClipboard,
}

impl App {
    pub fn new(
        config: Config,
        ctx: Option<Arc<ExplorerContext>>,
        tx: mpsc::Sender<AsyncMessage>,
    ) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            config,
            ctx,
            base_url,
            tx,
            search_input: Input::default(),
            api_key_input: Input::default(),
            setup_error: None,
            selected_history_index: None,
            focus: Focus::Search,
            view: None,
            history: Vec::new(),
            debouncer: Debouncer::default(),
            toast: None,
            should_quit: false,
            default_chains: ChainRegistry::default(),
            clipboard: SystemClipboard::default(),
        }
    }

    pub fn needs_api_key_setup(&self) -> bool {
        self.ctx.is_none()
    }

    pub fn submit_api_key(&mut self) -> Result<(), String> {
        let key = self.api_key_input.value().trim().to_string();
        if key.is_empty() {
            return Err("API key cannot be empty".to_string());
        }

        match ExplorerContext::goldrush(&self.base_url, &key) {
            Ok(ctx) => {
                self.ctx = Some(Arc::new(ctx));
                if let Err(e) = self.config.set_api_key(key) {
                    warn!("Failed to persist API key: {e:#}");
                }
                self.api_key_input.reset();
                self.setup_error = None;
                info!("API key configured");
                Ok(())
            }
            Err(e) => Err(format!("Invalid API key: {e}")),
        }
    }

    pub fn chains(&self) -> &ChainRegistry {
        self.ctx
            .as_deref()
            .map(|ctx| ctx.chains())
            .unwrap_or(&self.default_chains)
    }

    pub fn selected_chain(&self) -> &str {
        &self.config.chain
    }

    pub fn selected_chain_label(&self) -> &str {
        self.chains().label(&self.config.chain)
    }

    /// Move the chain selector to the next chain and rerun the search
    pub fn cycle_chain(&mut self, now: Instant) {
        let Some(next) = self.chains().next_after(&self.config.chain) else {
            return;
        };
        let next = next.name.to_string();
        info!(chain = %next, "Selected chain");
        if let Err(e) = self.config.set_chain(next) {
            warn!("Failed to persist selected chain: {e:#}");
        }
        if !self.search_input.value().trim().is_empty() {
            self.debouncer.touch(now);
        }
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Called after every edit of the search box
    pub fn on_search_edited(&mut self, now: Instant) {
        self.clear_history_selection();
        if self.search_input.value().trim().is_empty() {
            self.debouncer.cancel();
            self.go_home();
        } else {
            self.debouncer.touch(now);
        }
    }

    /// Advance timers: debounced search and toast expiry
    pub fn tick(&mut self, now: Instant) {
        if self.debouncer.fire(now) {
            let query = self.search_input.value().to_string();
            self.run_search(&query);
        }
        if let Some((_, shown_at)) = &self.toast {
            if now.duration_since(*shown_at) >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }

    /// Enter in the search box: search now and record the query
    pub fn submit_search(&mut self) -> Option<String> {
        let query = if let Some(query) = self.get_selected_history_query() {
            self.clear_history_selection();
            self.search_input = Input::new(query.clone());
            query
        } else {
            let value = self.search_input.value().trim();
            if value.is_empty() {
                return None;
            }
            value.to_string()
        };

        self.debouncer.cancel();
        if let Err(e) = self.config.add_recent_search(query.clone()) {
            warn!("Failed to persist recent search: {e:#}");
        }
        self.run_search(&query);
        Some(query)
    }

    /// Classify `raw` and show the matching view in place of the current one
    pub fn run_search(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }

        let chain = self.config.chain.clone();
        let query = SearchQuery::parse(raw);
        debug!(kind = query.kind().as_str(), query = %query.description(), "Search dispatched");

        let link = match query {
            SearchQuery::Address(address) => NavLink::Address(AddressKey { chain, address }),
            SearchQuery::Tx(hash) => NavLink::Transaction(TxKey { chain, hash }),
            SearchQuery::Block(height) => NavLink::Block(BlockKey { chain, height }),
            SearchQuery::NotFound(reason) => {
                self.history.clear();
                self.view = Some(View::NotFound(reason));
                return;
            }
        };

        self.history.clear();
        self.show(link);
    }

    /// Replace the current view with `link` unless it already shows it
    fn show(&mut self, link: NavLink) {
        let keep = self.view.as_ref().is_some_and(|v| v.shows(&link));
        if !keep {
            self.view = Some(View::for_link(&link));
        }
        if let Some(view) = self.view.as_mut() {
            start_load(self.ctx.as_deref(), &self.tx, view, link, false);
        }
    }

    /// Open `link` on top of the current view, keeping it for `go_back`
    pub fn follow(&mut self, link: NavLink) {
        let mut view = View::for_link(&link);
        start_load(self.ctx.as_deref(), &self.tx, &mut view, link, true);
        if let Some(prev) = self.view.replace(view) {
            self.history.push(prev);
        }
        self.focus = Focus::Results;
    }

    /// Restart the current view's request
    pub fn reload(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if let Some(link) = view.current_link() {
            start_load(self.ctx.as_deref(), &self.tx, view, link, true);
        }
    }

    /// Commit an async result to the view that asked for it
    pub fn apply(&mut self, msg: AsyncMessage) -> bool {
        let mut views = self.view.iter_mut().chain(self.history.iter_mut());
        match msg {
            AsyncMessage::Block(ticket, result) => route!(views, Block, ticket, result),
            AsyncMessage::BlockTransactions(ticket, result) => {
                route!(views, Block.txs, ticket, result)
            }
            AsyncMessage::Transaction(ticket, result) => {
                route!(views, Transaction, ticket, result)
            }
            AsyncMessage::Balances(ticket, result) => route!(views, Address, ticket, result),
            AsyncMessage::Nfts(ticket, result) => route!(views, NftPicker, ticket, result),
            AsyncMessage::NftDetail(ticket, result) => route!(views, NftDetail, ticket, result),
        }
    }

    // ------------------------------------------------------------------
    // Recent searches
    // ------------------------------------------------------------------

    pub fn get_recent_searches(&self) -> &[String] {
        &self.config.recent_searches
    }

    pub fn select_history_prev(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(len - 1),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.config.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        if let Some(idx) = self.selected_history_index {
            if idx < self.config.recent_searches.len() {
                self.config.recent_searches.remove(idx);
                if let Err(e) = self.config.save() {
                    warn!("Failed to persist recent searches: {e:#}");
                }

                // Adjust selection
                if self.config.recent_searches.is_empty() {
                    self.selected_history_index = None;
                } else if idx >= self.config.recent_searches.len() {
                    self.selected_history_index = Some(self.config.recent_searches.len() - 1);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn go_back(&mut self) {
        match self.history.pop() {
            Some(prev) => self.view = Some(prev),
            None => self.go_home(),
        }
    }

    pub fn go_home(&mut self) {
        self.history.clear();
        self.view = None;
        self.focus = Focus::Search;
    }

    pub fn is_on_home(&self) -> bool {
        self.view.is_none()
    }

    pub fn focus_results(&mut self) {
        if self.view.is_some() {
            self.focus = Focus::Results;
        }
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn current_links(&self) -> Vec<NavLink> {
        self.view
            .as_ref()
            .map(|v| v.links(&self.config.nft_chains))
            .unwrap_or_default()
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        let count = self.current_links().len();
        if let Some(selected) = self.view.as_mut().and_then(View::selected_link_mut) {
            if count > 0 {
                *selected = if *selected == 0 { count - 1 } else { *selected - 1 };
            }
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let count = self.current_links().len();
        if let Some(selected) = self.view.as_mut().and_then(View::selected_link_mut) {
            if count > 0 {
                *selected = (*selected + 1) % count;
            }
        }
    }

    pub fn get_selected_link(&self) -> Option<NavLink> {
        let view = self.view.as_ref()?;
        view.links(&self.config.nft_chains)
            .into_iter()
            .nth(view.selected_link())
    }

    pub fn follow_selected(&mut self) {
        if let Some(link) = self.get_selected_link() {
            self.follow(link);
        }
    }

    /// Open the NFT picker for the address being shown
    pub fn open_nfts(&mut self) {
        let link = self.current_links().into_iter().find(|l| matches!(l, NavLink::Nfts(_)));
        if let Some(link) = link {
            self.follow(link);
        }
    }

    pub fn toggle_relative_time(&mut self) {
        if let Some(View::Transaction(v)) = self.view.as_mut() {
            v.relative_time = !v.relative_time;
        }
    }

    /// Copy the selected link, or the view's own identifier
    pub fn copy_selected(&mut self, now: Instant) {
        let (text, is_address) = match self.get_selected_link() {
            Some(link) => (link.copy_text(), link.is_address()),
            None => match self.view.as_ref().and_then(View::primary_text) {
                Some(text) => {
                    let is_address = matches!(self.view, Some(View::Address(_)));
                    (text, is_address)
                }
                None => return,
            },
        };

        let msg = match self.clipboard.copy(&text) {
            Ok(()) if is_address => "Address copied!",
            Ok(()) => "Copied!",
            Err(e) => {
                warn!("{e}");
                "Copy failed"
            }
        };
        self.toast = Some((msg.to_string(), now));
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|(msg, _)| msg.as_str())
    }
}
