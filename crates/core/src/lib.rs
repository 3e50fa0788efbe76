//! Tetherbook Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Tetherbook.
//! It is store-agnostic and defines traits that are implemented
//! by host applications.

pub mod constants;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod transactions;

// Re-export common types from the ledger module
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
