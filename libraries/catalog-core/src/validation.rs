//! Field-level album validation
//!
//! The same rules apply to create and update. Fields are checked in a fixed
//! order and the first failure is reported:
//!
//! | field | rule |
//! |---|---|
//! | `title` | present, string, non-empty after trim |
//! | `artist` | present, string, non-empty after trim |
//! | `price` | present, finite number, `>= 0` |
//! | `image_url` | present, string, non-empty after trim |
//! | `year` | optional; if given, an integer that fits `i32` |
//!
//! Values are stored as supplied. Trimming is only used to test emptiness.

use crate::error::{CatalogError, Result};
use crate::types::{AlbumFields, AlbumPayload, Field};
use serde_json::Value;

/// Validate an untrusted payload into typed fields
///
/// # Errors
/// Returns [`CatalogError::Validation`] for the first failing field.
pub fn validate_payload(payload: &AlbumPayload) -> Result<AlbumFields> {
    let title = required_text(payload.title.as_ref(), Field::Title)?;
    let artist = required_text(payload.artist.as_ref(), Field::Artist)?;
    let price = required_price(payload.price.as_ref())?;
    let image_url = required_text(payload.image_url.as_ref(), Field::ImageUrl)?;
    let year = optional_year(payload.year.as_ref())?;

    Ok(AlbumFields {
        title,
        artist,
        price,
        image_url,
        year,
    })
}

/// Re-check already-typed fields against the same rules
///
/// Used for albums that arrive fully typed, e.g. from a seed file.
///
/// # Errors
/// Returns [`CatalogError::Validation`] for the first failing field.
pub fn validate_fields(fields: &AlbumFields) -> Result<()> {
    check_text(&fields.title, Field::Title)?;
    check_text(&fields.artist, Field::Artist)?;
    check_price(fields.price)?;
    check_text(&fields.image_url, Field::ImageUrl)?;
    Ok(())
}

fn required_text(value: Option<&Value>, field: Field) -> Result<String> {
    match value {
        Some(Value::String(text)) => {
            check_text(text, field)?;
            Ok(text.clone())
        }
        _ => Err(CatalogError::Validation(field)),
    }
}

fn required_price(value: Option<&Value>) -> Result<f64> {
    let price = value
        .and_then(Value::as_f64)
        .ok_or(CatalogError::Validation(Field::Price))?;
    check_price(price)?;
    Ok(price)
}

fn optional_year(value: Option<&Value>) -> Result<Option<i32>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .and_then(|year| i32::try_from(year).ok())
            .map(Some)
            .ok_or(CatalogError::Validation(Field::Year)),
    }
}

fn check_text(text: &str, field: Field) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CatalogError::Validation(field));
    }
    Ok(())
}

fn check_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation(Field::Price));
    }
    Ok(())
}
