//! Album Catalog Core
//!
//! Transport-agnostic types, traits, and error handling for the album catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `AlbumFields`, `AlbumPayload`, sorting options
//! - **Core Traits**: `AlbumStore`, the primitive collection operations
//! - **Validation**: turning an untrusted `AlbumPayload` into `AlbumFields`
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use catalog_core::types::{AlbumPayload, Field};
//! use catalog_core::CatalogError;
//! use serde_json::json;
//!
//! let payload: AlbumPayload = serde_json::from_value(json!({
//!     "title": "A",
//!     "artist": "B",
//!     "price": 9.99,
//!     "image_url": "http://x"
//! }))
//! .unwrap();
//! let fields = payload.validate().unwrap();
//! assert_eq!(fields.title, "A");
//!
//! let missing_price: AlbumPayload =
//!     serde_json::from_value(json!({ "title": "A", "artist": "B", "image_url": "http://x" }))
//!         .unwrap();
//! assert!(matches!(
//!     missing_price.validate(),
//!     Err(CatalogError::Validation(Field::Price))
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use traits::AlbumStore;

pub use types::{
    Album, AlbumFields, AlbumId, AlbumPayload, AlbumSort, Field, SortField, SortOrder,
};
