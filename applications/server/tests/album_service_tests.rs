/// Album service tests
/// Tests validation, id allocation and outcome mapping without HTTP
mod common;

use catalog_core::{AlbumFields, AlbumPayload, CatalogError, Field};
use common::{empty_service, sample_service};
use serde_json::json;

fn payload(value: serde_json::Value) -> AlbumPayload {
    serde_json::from_value(value).unwrap()
}

fn valid(title: &str) -> AlbumPayload {
    AlbumPayload::from(AlbumFields::new(title, "B", 9.99, "http://x"))
}

/// Creating into an empty catalog yields id 1 with the given fields
#[test]
fn test_create_into_empty_catalog() {
    let service = empty_service();

    let album = service
        .create_album(&payload(json!({
            "title": "A",
            "artist": "B",
            "price": 9.99,
            "image_url": "http://x"
        })))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&album).unwrap(),
        json!({ "id": 1, "title": "A", "artist": "B", "price": 9.99, "image_url": "http://x" })
    );
}

/// New ids are max + 1 over the current contents
#[test]
fn test_create_uses_max_plus_one() {
    let service = sample_service();

    assert_eq!(service.create_album(&valid("Seventh")).unwrap().id, 7);
    assert_eq!(service.create_album(&valid("Eighth")).unwrap().id, 8);
}

/// Deleting album 6 then creating reuses id 6
#[test]
fn test_delete_highest_then_create_reuses_id() {
    let service = sample_service();

    let deleted = service.delete_album(6).unwrap();
    assert_eq!(deleted.id, 6);

    let album = service.create_album(&valid("Reused")).unwrap();
    assert_eq!(album.id, 6);
    assert_eq!(album.title, "Reused");
}

/// Empty title is reported as a title failure and nothing is stored
#[test]
fn test_create_with_empty_title_fails_on_title() {
    let service = sample_service();

    let result = service.create_album(&payload(json!({
        "title": "",
        "artist": "B",
        "price": 1,
        "image_url": "http://x"
    })));

    assert_eq!(result, Err(CatalogError::Validation(Field::Title)));
    assert_eq!(service.album_count(), 6);
}

/// Negative price is reported as a price failure
#[test]
fn test_create_with_negative_price_fails_on_price() {
    let service = sample_service();

    let result = service.create_album(&payload(json!({
        "title": "A",
        "artist": "B",
        "price": -1,
        "image_url": "http://x"
    })));

    assert_eq!(result, Err(CatalogError::Validation(Field::Price)));
    assert_eq!(service.album_count(), 6);
}

/// Update of an absent id is NotFound and leaves the catalog alone
#[test]
fn test_update_missing_album_is_not_found() {
    let service = sample_service();
    let before = service.list_albums();

    assert_eq!(
        service.update_album(999, &valid("Ghost")),
        Err(CatalogError::AlbumNotFound(999))
    );
    assert_eq!(service.list_albums(), before);
}

/// Invalid payloads are reported before the id is looked up
#[test]
fn test_update_validation_wins_over_missing_id() {
    let service = sample_service();

    let result = service.update_album(999, &payload(json!({ "title": "A" })));

    assert_eq!(result, Err(CatalogError::Validation(Field::Artist)));
}

/// Update keeps the id and position, and ignores an `id` in the body
#[test]
fn test_update_preserves_id() {
    let service = sample_service();

    let updated = service
        .update_album(
            2,
            &payload(json!({
                "id": 77,
                "title": "Eight Revision Army",
                "artist": "The Blue-Green Stripes",
                "price": 15.0,
                "image_url": "https://example.com/x.jpg",
                "year": 2021
            })),
        )
        .unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.year, Some(2021));
    assert_eq!(service.get_album(2).unwrap(), updated);
    assert!(service.get_album(77).is_err());

    let ids: Vec<_> = service.list_albums().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

/// get/delete on absent ids return NotFound without mutating
#[test]
fn test_get_and_delete_missing_are_not_found() {
    let service = sample_service();
    let before = service.list_albums();

    assert_eq!(service.get_album(999), Err(CatalogError::AlbumNotFound(999)));
    assert_eq!(service.delete_album(999), Err(CatalogError::AlbumNotFound(999)));
    assert_eq!(service.list_albums(), before);
}

/// Deleting one album leaves every other album as it was
#[test]
fn test_delete_does_not_disturb_others() {
    let service = sample_service();
    let mut expected = service.list_albums();
    expected.remove(2);

    service.delete_album(3).unwrap();

    assert_eq!(service.list_albums(), expected);
}

/// Listing twice without mutation gives identical results
#[test]
fn test_list_is_idempotent() {
    let service = sample_service();
    assert_eq!(service.list_albums(), service.list_albums());
}
