//! Store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot open or initialize state database: {0}")]
    Initialization(#[source] rusqlite::Error),

    #[error("Invalid state record: {0}")]
    Validation(String),

    #[error("Query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("Write failed: {0}")]
    Write(#[source] rusqlite::Error),
}

impl StoreError {
    /// True when a write failed because the key already exists.
    ///
    /// The `state` table enforces key uniqueness through its primary key, so
    /// a constraint violation on a write means a duplicate key.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            Self::Write(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}
