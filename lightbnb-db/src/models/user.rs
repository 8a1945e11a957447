//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row
///
/// Email uniqueness is an application convention; this layer does not
/// enforce it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stored exactly as supplied. Hashing is the caller's concern.
    pub password: String,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
