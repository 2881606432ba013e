use catalog_core::{Album, AlbumFields, AlbumId, AlbumStore};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Album store backed by a locked `Vec`
///
/// Mutations hold the write lock for their whole read-modify-write, so id
/// allocation and ordering never interleave. Reads hold the read lock and
/// return a cloned snapshot.
#[derive(Debug, Default)]
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumStore {
    /// Empty store; the first insert gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `albums` in the given order
    ///
    /// The caller is responsible for id uniqueness; [`crate::load_seed_file`]
    /// checks it for file input.
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Store holding the six-album sample catalog
    pub fn sample() -> Self {
        Self::with_albums(crate::seed::sample_albums())
    }

    // Every mutation is a single step on a plain Vec, so a panic in another
    // thread cannot leave it half-written.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Album>> {
        self.albums.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Album>> {
        self.albums.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn next_id(albums: &[Album]) -> AlbumId {
    albums.iter().map(|album| album.id).max().map_or(1, |max| max + 1)
}

fn position(albums: &[Album], id: AlbumId) -> Option<usize> {
    albums.iter().position(|album| album.id == id)
}

impl AlbumStore for InMemoryAlbumStore {
    fn list(&self) -> Vec<Album> {
        self.read().clone()
    }

    fn get_by_id(&self, id: AlbumId) -> Option<Album> {
        self.read().iter().find(|album| album.id == id).cloned()
    }

    fn insert(&self, fields: AlbumFields) -> Album {
        let mut albums = self.write();
        let album = Album::new(next_id(&albums), fields);
        albums.push(album.clone());
        tracing::trace!(id = album.id, "album inserted");
        album
    }

    fn replace(&self, id: AlbumId, fields: AlbumFields) -> Option<Album> {
        let mut albums = self.write();
        let index = position(&albums, id)?;
        let album = Album::new(id, fields);
        albums[index] = album.clone();
        tracing::trace!(id, index, "album replaced");
        Some(album)
    }

    fn remove(&self, id: AlbumId) -> Option<Album> {
        let mut albums = self.write();
        let index = position(&albums, id)?;
        tracing::trace!(id, index, "album removed");
        Some(albums.remove(index))
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}
