//! Album Catalog Server Library
//!
//! HTTP front end for the in-memory album catalog: validation and outcome
//! mapping in [`services::AlbumService`], REST routes in [`api`].
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::AlbumService;
pub use state::AppState;
