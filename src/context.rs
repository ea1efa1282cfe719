use std::fmt;
use std::sync::Arc;

use crate::api::{ApiError, ExplorerApi, GoldRushClient};
use crate::chains::ChainRegistry;

/// Read-only collaborators shared by every view: the API handle and the
/// chain list. Built once and passed around behind an `Arc`.
#[derive(Clone)]
pub struct ExplorerContext {
    api: Arc<dyn ExplorerApi>,
    chains: ChainRegistry,
}

impl fmt::Debug for ExplorerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerContext")
            .field("chains", &self.chains.all().len())
            .finish_non_exhaustive()
    }
}

impl ExplorerContext {
    pub fn new(api: Arc<dyn ExplorerApi>, chains: ChainRegistry) -> Self {
        Self { api, chains }
    }

    /// Context backed by the GoldRush HTTP client and the built-in chains
    pub fn goldrush(base_url: &str, api_key: &str) -> Result<Self, ApiError> {
        let client = GoldRushClient::new(base_url, api_key)?;
        Ok(Self::new(Arc::new(client), ChainRegistry::default()))
    }

    pub fn api(&self) -> Arc<dyn ExplorerApi> {
        Arc::clone(&self.api)
    }

    pub fn chains(&self) -> &ChainRegistry {
        &self.chains
    }
}
