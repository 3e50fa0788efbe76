//! Transactions module - domain models, services, and traits.

mod memory_repository;
mod transactions_constants;
mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;



pub use memory_repository::InMemoryTransactionRepository;
pub use transactions_constants::*;
pub use transactions_errors::TransactionError;
pub use transactions_model::{min_trade_quantity, NewTransaction, Transaction, TransactionType};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
