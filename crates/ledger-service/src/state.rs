//! Application state.

use std::sync::Arc;

use ledger_store::Store;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The store is held behind the `Store` trait object so handlers stay
/// independent of the storage engine; tests swap in an in-memory or
/// failing implementation.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn Store>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
