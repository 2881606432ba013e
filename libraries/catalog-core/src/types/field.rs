//! Album field names

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated album field, named as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// `title`
    Title,
    /// `artist`
    Artist,
    /// `price`
    Price,
    /// `image_url`
    ImageUrl,
    /// `year`
    Year,
}

impl Field {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Price => "price",
            Field::ImageUrl => "image_url",
            Field::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
