/// Shared application state
use crate::services::AlbumService;
use catalog_core::AlbumStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<AlbumService>,
}

impl AppState {
    pub fn new(albums: Arc<AlbumService>) -> Self {
        Self { albums }
    }

    /// State around a fresh service for `store`
    pub fn with_store(store: Arc<dyn AlbumStore>) -> Self {
        Self::new(Arc::new(AlbumService::new(store)))
    }
}
