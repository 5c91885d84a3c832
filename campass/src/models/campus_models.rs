//! Entity models for campus categories and locations
//!
//! Entities are plain data with value equality. An `id` of `None` marks a
//! record that has not been persisted yet; the datastore assigns the
//! identifier on insert. Constraints (required fields, unique category
//! names, referential integrity, description length) live in the relational
//! schema, not here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named grouping of locations (e.g. "Library")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Build an unsaved category with a description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: Some(description.into()),
        }
    }
}

/// A point of interest with geographic coordinates, belonging to exactly one
/// category. Latitude is constrained to [-90, 90] and longitude to
/// [-180, 180] by the data it is seeded from; the service never computes on
/// the coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Build an unsaved location referencing an already persisted category.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: Some(description.into()),
            category,
            latitude,
            longitude,
        }
    }
}

/// Flat row shape produced by joining `locations` with `categories`.
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub category_name: String,
    pub category_description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            category: Category {
                id: Some(row.category_id),
                name: row.category_name,
                description: row.category_description,
            },
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}
