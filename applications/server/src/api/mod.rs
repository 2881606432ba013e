/// API route modules
pub mod albums;
pub mod health;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Catalog routes, without transport layers (tracing, CORS)
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        .with_state(app_state)
}
