//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use catalog_server::{api, state::AppState, AlbumService};
use catalog_storage::InMemoryAlbumStore;
use serde_json::Value;
use std::sync::Arc;

/// Router over a fresh copy of the sample catalog
pub fn create_test_app() -> Router {
    create_app_with(InMemoryAlbumStore::sample())
}

/// Router over the given store
pub fn create_app_with(store: InMemoryAlbumStore) -> Router {
    api::create_router(AppState::with_store(Arc::new(store)))
}

/// Service over a fresh copy of the sample catalog
pub fn sample_service() -> AlbumService {
    AlbumService::new(Arc::new(InMemoryAlbumStore::sample()))
}

/// Service over an empty catalog
pub fn empty_service() -> AlbumService {
    AlbumService::new(Arc::new(InMemoryAlbumStore::new()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Read a response body as raw bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn new_album() -> Value {
        json!({
            "title": "New Album",
            "artist": "New Artist",
            "price": 11.99,
            "image_url": "https://example.com/image.jpg"
        })
    }

    pub fn updated_album() -> Value {
        json!({
            "title": "Updated Title",
            "artist": "Updated Artist",
            "price": 15.99,
            "image_url": "https://example.com/updated.jpg"
        })
    }
}
