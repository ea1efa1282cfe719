//! Keyed async resource loading.
//!
//! Every view owns a [`Loader`] for the data it shows. Starting a request
//! hands out a [`Ticket`]; only the result carrying the loader's current
//! ticket may commit, so a slow response for an old key can never overwrite
//! the view for a newer one.

use futures::future::join_all;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, error, warn};

use crate::api::ApiError;

// ============================================================================
// Error Envelope
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The API reported the failure in its response
    Remote,
    /// The request never produced a usable response
    Transport,
}

/// Failure shown in place of a view's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: ErrorKind,
    pub message: String,
}

impl LoadError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Remote,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: message.into(),
        }
    }
}

/// Transport failures log at error level, API-reported ones at warn
macro_rules! log_failure {
    ($err:expr, $($field:tt)*) => {
        match $err.kind {
            ErrorKind::Transport => error!($($field)*, "{}", $err),
            ErrorKind::Remote => warn!($($field)*, "{}", $err),
        }
    };
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        if err.is_remote() {
            return Self::remote(err.to_string());
        }

        // Flatten the source chain the way anyhow's {:#} does
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::transport(message)
    }
}

// ============================================================================
// Load State
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(LoadError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Idle counts as loading for rendering purposes
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// Loader
// ============================================================================

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identity of one request cycle. Unique across all loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// State machine for one keyed remote resource
#[derive(Debug)]
pub struct Loader<K, T> {
    key: Option<K>,
    ticket: Option<Ticket>,
    state: LoadState<T>,
    task: Option<AbortHandle>,
}

impl<K, T> Default for Loader<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            ticket: None,
            state: LoadState::Idle,
            task: None,
        }
    }
}

impl<K, T> Drop for Loader<K, T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<K: Clone + PartialEq + fmt::Debug, T> Loader<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    /// Begin a new request cycle for `key`.
    ///
    /// Resets to `Loading`, drops any previous value or error, and aborts
    /// the task of the cycle being replaced.
    pub fn request(&mut self, key: K) -> Ticket {
        self.abort_task();
        let ticket = Ticket::next();
        debug!(?key, ?ticket, "Loader request");
        self.key = Some(key);
        self.ticket = Some(ticket);
        self.state = LoadState::Loading;
        ticket
    }

    /// Begin a request only when `key` differs from the current one or
    /// nothing has been requested yet
    pub fn ensure(&mut self, key: K) -> Option<Ticket> {
        if self.key.as_ref() == Some(&key) && !matches!(self.state, LoadState::Idle) {
            return None;
        }
        Some(self.request(key))
    }

    /// Restart the current key, e.g. after a failure
    pub fn reload(&mut self) -> Option<Ticket> {
        let key = self.key.clone()?;
        Some(self.request(key))
    }

    /// Back to `Idle`; any in-flight result is discarded on arrival
    pub fn reset(&mut self) {
        self.abort_task();
        self.key = None;
        self.ticket = None;
        self.state = LoadState::Idle;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.ticket == Some(ticket)
    }

    /// Tie a spawned task to `ticket` so it is aborted when superseded
    pub fn attach(&mut self, ticket: Ticket, task: AbortHandle) {
        if self.is_current(ticket) {
            self.task = Some(task);
        } else {
            task.abort();
        }
    }

    /// Commit the outcome of a request.
    ///
    /// Returns false and leaves the state untouched when `ticket` belongs
    /// to a superseded cycle or the cycle already completed.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, LoadError>) -> bool {
        if !self.is_current(ticket) || !matches!(self.state, LoadState::Loading) {
            debug!(?ticket, current = ?self.ticket, "Discarding stale response");
            return false;
        }

        self.task = None;
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => {
                log_failure!(err, key = ?self.key);
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Request `key` and run `fetch` on the tokio runtime.
    ///
    /// The outcome is wrapped with `wrap` and sent on `tx`; the receiver
    /// passes it back to [`Loader::resolve`].
    pub fn start<Fut, E, M, W>(
        &mut self,
        key: K,
        fetch: Fut,
        tx: mpsc::Sender<M>,
        wrap: W,
    ) -> Ticket
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Into<LoadError> + Send + 'static,
        T: Send + 'static,
        M: Send + 'static,
        W: FnOnce(Ticket, Result<T, LoadError>) -> M + Send + 'static,
    {
        let ticket = self.request(key);
        let handle = tokio::spawn(async move {
            let result = fetch.await.map_err(Into::into);
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(wrap(ticket, result)).await;
        });
        self.attach(ticket, handle.abort_handle());
        ticket
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// ============================================================================
// Fan-out
// ============================================================================

/// Issue `fetch` for every key concurrently and concatenate the results in
/// key order.
///
/// A failing key contributes no items; the failure is logged against that
/// key and never fails the batch.
pub async fn fan_out<'a, K, T, E, F, Fut>(keys: &'a [K], fetch: F) -> Vec<T>
where
    K: Display,
    E: Into<LoadError>,
    F: Fn(&'a K) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let requests = keys.iter().map(|key| {
        let request = fetch(key);
        async move { (key, request.await) }
    });

    join_all(requests)
        .await
        .into_iter()
        .flat_map(|(key, result)| match result {
            Ok(items) => items,
            Err(err) => {
                let err: LoadError = err.into();
                log_failure!(err, %key, substituted = "empty");
                Vec::new()
            }
        })
        .collect()
}
