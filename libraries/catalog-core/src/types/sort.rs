//! Listing order options

use super::Album;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field an album listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Case-insensitive title
    Title,
    /// Case-insensitive artist
    Artist,
    /// Numeric price
    Price,
    /// Release year, unknown years first
    Year,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Requested ordering for an album listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSort {
    /// Field to compare
    pub field: SortField,
    /// Direction
    #[serde(default)]
    pub order: SortOrder,
}

impl AlbumSort {
    /// Ascending sort on `field`
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on `field`
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    /// Compare two albums under this ordering
    pub fn compare(&self, a: &Album, b: &Album) -> Ordering {
        let ordering = match self.field {
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Artist => a.artist.to_lowercase().cmp(&b.artist.to_lowercase()),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Year => a.year.cmp(&b.year),
        };

        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort; albums that compare equal keep their order
    pub fn apply(&self, albums: &mut [Album]) {
        albums.sort_by(|a, b| self.compare(a, b));
    }
}
