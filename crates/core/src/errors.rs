//! Core error types for the NestEgg application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (HTTP status codes, constraint names, etc.) are converted to these types
//! by the storage layer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the NestEgg core.
///
/// Every fallible core operation returns one of these variants. Raw storage
/// error details are wrapped in string form so that nothing transport-specific
/// leaks to external callers.
#[derive(Error, Debug)]
pub enum Error {
    /// The referenced entity does not exist or does not belong to the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The requested amount exceeds the available balance.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    /// A goal transaction was attempted from a non-designated account while a
    /// designated savings account is configured.
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// Token verification failed or no identity could be resolved.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

/// Storage-agnostic error type for ledger store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its own errors (HTTP, SQL, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to reach the ledger store.
    #[error("Failed to connect to ledger store: {0}")]
    ConnectionFailed(String),

    /// A store query failed to execute.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested row was not found.
    #[error("Row not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Errors from the multi-step transfer saga.
///
/// A transfer debits the source account before crediting the destination, so a
/// credit failure happens after money has already moved. These variants record
/// how far the compensation got.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The credit step failed and the debit was compensated; both balances are
    /// back at their pre-call values.
    #[error("Credit to destination account failed (debit was rolled back): {0}")]
    CreditFailed(String),

    /// The credit step failed and the compensating re-credit of the source
    /// also failed. The source account is left debited with no matching
    /// credit; out-of-band reconciliation is required.
    #[error("Credit failed ({credit}) and compensation also failed ({compensation})")]
    CompensationFailed { credit: String, compensation: String },
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
