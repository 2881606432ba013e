/// Core error types for the album catalog
use thiserror::Error;

use crate::types::{AlbumId, Field};

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Outcome of a catalog operation that did not succeed.
///
/// Neither variant is exceptional: both are normal results a caller is
/// expected to branch on, and neither leaves the store modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A caller-supplied field violates its rule
    #[error("Missing or invalid required field: {0}")]
    Validation(Field),

    /// The targeted album is not in the store
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),
}

impl CatalogError {
    /// The offending field, if this is a validation failure
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Validation(field) => Some(*field),
            Self::AlbumNotFound(_) => None,
        }
    }

    /// Whether this error reports a missing album
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AlbumNotFound(_))
    }
}
