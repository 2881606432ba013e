/// Core traits for the album catalog
use crate::types::{Album, AlbumFields, AlbumId};

/// Authoritative album collection
///
/// Implementers own the mutable list of albums and perform primitive,
/// unvalidated mutations on it. Callers are expected to have validated
/// field contents already (see [`crate::types::AlbumPayload::validate`]).
///
/// Methods take `&self` so a single store can be shared behind an `Arc`;
/// implementations provide their own synchronization. Every mutation must
/// be atomic with respect to every other operation.
pub trait AlbumStore: Send + Sync {
    /// All albums in current order (insertion order, with in-place updates)
    fn list(&self) -> Vec<Album>;

    /// Look up an album by id
    fn get_by_id(&self, id: AlbumId) -> Option<Album>;

    /// Append a new album and return it
    ///
    /// The id is one greater than the largest id currently held, or `1`
    /// when the store is empty. It is derived from the current contents on
    /// every call, so removing the highest id frees it for reuse.
    fn insert(&self, fields: AlbumFields) -> Album;

    /// Overwrite the album with `id` in place, keeping its id and position
    ///
    /// Returns `None` without mutating anything if `id` is absent.
    fn replace(&self, id: AlbumId, fields: AlbumFields) -> Option<Album>;

    /// Remove the album with `id` and return it
    ///
    /// Returns `None` without mutating anything if `id` is absent.
    fn remove(&self, id: AlbumId) -> Option<Album>;

    /// Number of albums held
    fn count(&self) -> usize {
        self.list().len()
    }
}
