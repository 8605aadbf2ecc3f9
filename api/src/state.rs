//! Application state container shared across Axum route handlers.
//!
//! The state holds the injected storage backend. It is constructed once at
//! process start (or per test) and cloned into handlers via Axum's
//! `State<T>` extractor; there is no global storage singleton.

use db::storage::Storage;
use std::sync::Arc;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn Storage>,
}

impl AppState {
    /// Creates a new `AppState` around any storage backend.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns a shared reference to the storage backend.
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Returns a cloned handle to the storage backend.
    ///
    /// Useful for spawning tasks that require ownership.
    pub fn storage_clone(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }
}
