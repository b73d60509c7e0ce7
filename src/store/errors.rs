//! # Store Errors
//!
//! Error types for stock data access.

use sqlx::error::ErrorKind;
use thiserror::Error;

use super::stock::StockId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data access errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No row with the requested id
    #[error("Stock not found: {0}")]
    NotFound(StockId),

    /// The store rejected a write (unique, not-null, check or foreign key)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A connection could not be acquired or was lost
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other driver failure
    #[error("Query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StoreError::Constraint(db_err.message().to_string()),
                _ => StoreError::Query(db_err.message().to_string()),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}
