/// Albums API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use catalog_core::{Album, AlbumId, AlbumPayload, AlbumSort, SortField, SortOrder};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListAlbumsQuery {
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl ListAlbumsQuery {
    /// `order` on its own is ignored
    pub fn album_sort(&self) -> Option<AlbumSort> {
        self.sort.map(|field| AlbumSort {
            field,
            order: self.order.unwrap_or_default(),
        })
    }
}

/// Ids must be a whole base-10 integer; `12abc` and `1.5` are rejected
fn parse_album_id(raw: &str) -> Result<AlbumId> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest("Invalid album ID".to_string()))
}

/// GET /albums
/// List albums in catalog order, or sorted with `?sort=<field>&order=<asc|desc>`
pub async fn list_albums(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<ListAlbumsQuery>, QueryRejection>,
) -> Result<Json<Vec<Album>>> {
    let Query(query) = query?;
    let albums = app_state.albums.list_albums_sorted(query.album_sort());
    Ok(Json(albums))
}

/// GET /albums/:id
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Album>> {
    let id = parse_album_id(&id)?;
    let album = app_state.albums.get_album(id)?;
    Ok(Json(album))
}

/// POST /albums
/// Create a new album; the catalog assigns its id
pub async fn create_album(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<AlbumPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>)> {
    let Json(payload) = payload?;
    let album = app_state.albums.create_album(&payload)?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// PUT /albums/:id
/// Replace every field but the id
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<AlbumPayload>, JsonRejection>,
) -> Result<Json<Album>> {
    let id = parse_album_id(&id)?;
    let Json(payload) = payload?;
    let album = app_state.albums.update_album(id, &payload)?;
    Ok(Json(album))
}

/// DELETE /albums/:id
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = parse_album_id(&id)?;
    app_state.albums.delete_album(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_ids_parse_strictly() {
        assert_eq!(parse_album_id("42").unwrap(), 42);
        assert_eq!(parse_album_id("-3").unwrap(), -3);
        for raw in ["abc", "1.5", "12abc", "", " 1"] {
            assert!(
                matches!(parse_album_id(raw), Err(ServerError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn order_without_sort_is_ignored() {
        let query = ListAlbumsQuery {
            sort: None,
            order: Some(SortOrder::Desc),
        };
        assert_eq!(query.album_sort(), None);

        let query = ListAlbumsQuery {
            sort: Some(SortField::Title),
            order: None,
        };
        assert_eq!(query.album_sort(), Some(AlbumSort::asc(SortField::Title)));
    }
}
