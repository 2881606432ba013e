/// Storage-specific errors
use catalog_core::{AlbumId, Field};
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
///
/// The store itself cannot fail; these only arise while loading seed data.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Two seed albums share an id
    #[error("Duplicate album id in seed data: {0}")]
    DuplicateId(AlbumId),

    /// Seed album id is zero, negative, or leaves no room for a new id
    #[error("Album id out of range: {0}")]
    InvalidId(AlbumId),

    /// Seed album fails field validation
    #[error("Album {id} has an invalid field: {field}")]
    InvalidAlbum { id: AlbumId, field: Field },

    /// Serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
