//! Transaction-related error types.

use thiserror::Error;

/// Errors that can occur while recording or parsing transactions.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
