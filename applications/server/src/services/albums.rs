/// Album service - validation and outcome mapping over an album store
use catalog_core::{
    Album, AlbumId, AlbumPayload, AlbumSort, AlbumStore, CatalogError, Result,
};
use std::sync::Arc;

/// Catalog operations as seen by every transport
///
/// Validates caller input before anything reaches the store and turns
/// absent ids into [`CatalogError::AlbumNotFound`]. A failed operation
/// never modifies the store.
#[derive(Clone)]
pub struct AlbumService {
    store: Arc<dyn AlbumStore>,
}

impl AlbumService {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }

    /// All albums in store order
    pub fn list_albums(&self) -> Vec<Album> {
        self.store.list()
    }

    /// All albums, optionally sorted; the store's own order is untouched
    pub fn list_albums_sorted(&self, sort: Option<AlbumSort>) -> Vec<Album> {
        let mut albums = self.store.list();
        if let Some(sort) = sort {
            sort.apply(&mut albums);
        }
        albums
    }

    /// Look up one album
    pub fn get_album(&self, id: AlbumId) -> Result<Album> {
        self.store.get_by_id(id).ok_or_else(|| {
            tracing::debug!(id, "album not found");
            CatalogError::AlbumNotFound(id)
        })
    }

    /// Validate and append a new album
    pub fn create_album(&self, payload: &AlbumPayload) -> Result<Album> {
        let fields = payload.validate().map_err(log_rejected)?;
        let album = self.store.insert(fields);
        tracing::info!(id = album.id, title = %album.title, "album created");
        Ok(album)
    }

    /// Validate, then replace the album with `id`
    ///
    /// Validation runs first, so an invalid payload is reported even when
    /// `id` does not exist.
    pub fn update_album(&self, id: AlbumId, payload: &AlbumPayload) -> Result<Album> {
        let fields = payload.validate().map_err(log_rejected)?;
        let album = self.store.replace(id, fields).ok_or_else(|| {
            tracing::debug!(id, "update target not found");
            CatalogError::AlbumNotFound(id)
        })?;
        tracing::info!(id, title = %album.title, "album updated");
        Ok(album)
    }

    /// Remove the album with `id` and return it
    pub fn delete_album(&self, id: AlbumId) -> Result<Album> {
        let album = self.store.remove(id).ok_or_else(|| {
            tracing::debug!(id, "delete target not found");
            CatalogError::AlbumNotFound(id)
        })?;
        tracing::info!(id, title = %album.title, "album deleted");
        Ok(album)
    }

    /// Number of albums in the catalog
    pub fn album_count(&self) -> usize {
        self.store.count()
    }
}

fn log_rejected(err: CatalogError) -> CatalogError {
    tracing::debug!(error = %err, "album payload rejected");
    err
}
