//! Start-up catalog data
//!
//! Either the built-in sample catalog or a JSON file holding an array of
//! complete albums (ids included). Seed data is read once; the store never
//! writes back.

use crate::error::{Result, StorageError};
use catalog_core::{validation, Album, AlbumFields, AlbumId, CatalogError};
use std::collections::HashSet;
use std::path::Path;

/// The six demo albums, ids 1 through 6
pub fn sample_albums() -> Vec<Album> {
    [
        (
            "You, Me and an App Id",
            "Daprize",
            10.99,
            "https://aka.ms/albums-daprlogo",
        ),
        (
            "Seven Revision Army",
            "The Blue-Green Stripes",
            13.99,
            "https://aka.ms/albums-containerappslogo",
        ),
        (
            "Scale It Up",
            "KEDA Club",
            13.99,
            "https://aka.ms/albums-kedalogo",
        ),
        (
            "Lost in Translation",
            "MegaDNS",
            12.99,
            "https://aka.ms/albums-envoylogo",
        ),
        (
            "Lock Down Your Love",
            "V is for VNET",
            12.99,
            "https://aka.ms/albums-vnetlogo",
        ),
        (
            "Sweet Container O' Mine",
            "Guns N Probeses",
            14.99,
            "https://aka.ms/albums-containerappslogo",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, artist, price, image_url), id)| {
        Album::new(id, AlbumFields::new(title, artist, price, image_url))
    })
    .collect()
}

/// Read and check a seed file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, if any id is
/// out of range or repeated, or if any album fails field validation.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Album>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let albums = parse_seed(&contents)?;
    tracing::debug!(path = %path.display(), count = albums.len(), "seed file loaded");
    Ok(albums)
}

/// Parse and check seed data from a JSON string
///
/// # Errors
///
/// Same as [`load_seed_file`], minus I/O.
pub fn parse_seed(json: &str) -> Result<Vec<Album>> {
    let albums: Vec<Album> = serde_json::from_str(json)?;
    check_albums(&albums)?;
    Ok(albums)
}

fn check_albums(albums: &[Album]) -> Result<()> {
    let mut seen = HashSet::with_capacity(albums.len());

    for album in albums {
        // New ids are max + 1, so the largest id must leave room for one more.
        if album.id <= 0 || album.id == AlbumId::MAX {
            return Err(StorageError::InvalidId(album.id));
        }
        if !seen.insert(album.id) {
            return Err(StorageError::DuplicateId(album.id));
        }
        if let Err(CatalogError::Validation(field)) = validation::validate_fields(&album.fields())
        {
            return Err(StorageError::InvalidAlbum { id: album.id, field });
        }
    }

    Ok(())
}
