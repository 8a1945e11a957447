//! Property records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property row
///
/// `cost_per_night` is stored in minor currency units (cents); the search
/// filters are dollar-denominated and divide by 100 when comparing.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i64,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Input for creating a property
///
/// Every field is optional. Absent fields are left out of the INSERT column
/// list entirely and take the schema defaults; a present field is always
/// written, including explicit zeroes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProperty {
    pub owner_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: Option<i64>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub parking_spaces: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub number_of_bedrooms: Option<i32>,
}
