//! Domain types for the album catalog

mod album;
mod field;
mod sort;

pub use album::{Album, AlbumFields, AlbumId, AlbumPayload};
pub use field::Field;
pub use sort::{AlbumSort, SortField, SortOrder};
