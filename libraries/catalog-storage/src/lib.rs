//! Album Catalog Storage
//!
//! In-process album store for the catalog.
//!
//! # Architecture
//!
//! - **In-Memory**: albums live in a single locked `Vec`; nothing is persisted
//! - **Explicit Instances**: every store is constructed and owned by its caller,
//!   so tests get isolated catalogs without resetting shared state
//! - **Vertical Slicing**: `albums` owns the collection, `seed` owns start-up data
//!
//! # Example
//!
//! ```rust
//! use catalog_core::{AlbumFields, AlbumStore};
//! use catalog_storage::InMemoryAlbumStore;
//!
//! let store = InMemoryAlbumStore::sample();
//! assert_eq!(store.count(), 6);
//!
//! let created = store.insert(AlbumFields::new("New", "Artist", 9.99, "http://x"));
//! assert_eq!(created.id, 7);
//! ```

mod error;

// Vertical slices
pub mod albums;
pub mod seed;

pub use albums::InMemoryAlbumStore;
pub use error::{Result, StorageError};
pub use seed::{load_seed_file, sample_albums};
