//! Core error types for the Tetherbook library.
//!
//! This module defines store-agnostic error types. Backend-specific errors
//! (HTTP, SQL, realtime channels, etc.) are converted to these types by the
//! host's repository implementation.

use thiserror::Error;

use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger library.
///
/// This enum represents all possible errors that can occur in the library.
/// Store-specific errors are wrapped in string form to keep this type
/// backend-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Transaction operation failed: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for persistence operations.
///
/// This enum uses `String` for error details, allowing host repository
/// implementations to convert their backend errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No valid owner identity was available for the request.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The backing store could not be reached or failed to respond.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}
