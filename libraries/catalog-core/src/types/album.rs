//! Album types

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Album identifier, positive and unique within a store
pub type AlbumId = i64;

/// An album in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Store-assigned identifier, never changes once assigned
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Price, never negative
    pub price: f64,

    /// Cover image location
    pub image_url: String,

    /// Release year, omitted from JSON when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Album {
    /// Build an album from an id and already-validated fields
    pub fn new(id: AlbumId, fields: AlbumFields) -> Self {
        Self {
            id,
            title: fields.title,
            artist: fields.artist,
            price: fields.price,
            image_url: fields.image_url,
            year: fields.year,
        }
    }

    /// Everything but the id
    pub fn fields(&self) -> AlbumFields {
        AlbumFields {
            title: self.title.clone(),
            artist: self.artist.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            year: self.year,
        }
    }
}

/// Validated album data without an id
///
/// This is what stores accept for insert and replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumFields {
    /// Album title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Price, never negative
    pub price: f64,
    /// Cover image location
    pub image_url: String,
    /// Release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl AlbumFields {
    /// Create fields without a year
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
            image_url: image_url.into(),
            year: None,
        }
    }

    /// Set the release year
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Untrusted album data as sent by a caller
///
/// Every field is an optional raw JSON value so that a missing field or one
/// of the wrong JSON type surfaces as a validation failure naming that
/// field rather than as a decoding error. Unknown keys, including `id`, are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumPayload {
    /// Raw `title`
    pub title: Option<Value>,
    /// Raw `artist`
    pub artist: Option<Value>,
    /// Raw `price`
    pub price: Option<Value>,
    /// Raw `image_url`
    pub image_url: Option<Value>,
    /// Raw `year`
    pub year: Option<Value>,
}

impl AlbumPayload {
    /// Check every field and produce typed [`AlbumFields`]
    ///
    /// # Errors
    /// Returns [`crate::CatalogError::Validation`] naming the first field
    /// that fails, in the order title, artist, price, image_url, year.
    pub fn validate(&self) -> Result<AlbumFields> {
        crate::validation::validate_payload(self)
    }
}

impl From<AlbumFields> for AlbumPayload {
    fn from(fields: AlbumFields) -> Self {
        Self {
            title: Some(Value::from(fields.title)),
            artist: Some(Value::from(fields.artist)),
            price: Some(Value::from(fields.price)),
            image_url: Some(Value::from(fields.image_url)),
            year: fields.year.map(Value::from),
        }
    }
}
