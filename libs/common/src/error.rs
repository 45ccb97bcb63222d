//! Custom error types for the common library

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Errors raised while reaching or querying the document store
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The store could not be reached
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A query against the store failed
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// The connection settings themselves are unusable
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
