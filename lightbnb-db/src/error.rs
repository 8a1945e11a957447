//! Error types for lightbnb-db
//!
//! Library consumers get structured errors: not-found is `Ok(None)` or an
//! empty vec at the call site, never an error variant. `DbError` is reserved
//! for operations that did not complete.

use thiserror::Error;

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Dynamic INSERT was asked to build a statement with zero columns.
    #[error("no fields to insert into '{table}'")]
    EmptyInsert { table: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_insert_display() {
        let err = DbError::EmptyInsert { table: "properties" };
        assert_eq!(err.to_string(), "no fields to insert into 'properties'");
    }
}
