//! Storage-specific error types for the hosted row store.
//!
//! This module provides error types that wrap HTTP transport failures and
//! store error responses and convert them to the database-agnostic error
//! types defined in `nestegg-core`.

use nestegg_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap transport and store-response failures.
///
/// These errors are internal to the storage layer and are converted to
/// `nestegg_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Store request failed: {0}")]
    RequestFailed(String),

    #[error("Row not found: {0}")]
    RowNotFound(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Failed to decode store response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            StorageError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            StorageError::Decode(err.to_string())
        } else {
            StorageError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Decode(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e))
            }
            StorageError::RequestFailed(e) => Error::Database(DatabaseError::QueryFailed(e)),
            StorageError::RowNotFound(e) => Error::Database(DatabaseError::NotFound(e)),
            StorageError::UniqueViolation(e) => Error::Database(DatabaseError::UniqueViolation(e)),
            StorageError::ForeignKeyViolation(e) => {
                Error::Database(DatabaseError::ForeignKeyViolation(e))
            }
            StorageError::Decode(e) => Error::Database(DatabaseError::Internal(e)),
        }
    }
}

/// Rewrites the store's generic empty-result error into the domain's
/// `NotFound` naming the missing entity. Other errors pass through.
pub(crate) fn map_missing(err: Error, entity: impl FnOnce() -> String) -> Error {
    match err {
        Error::Database(DatabaseError::NotFound(_)) => Error::NotFound(entity()),
        other => other,
    }
}
