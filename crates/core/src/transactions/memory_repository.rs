//! In-memory transaction repository.
//!
//! Reference implementation of [`TransactionRepositoryTrait`] backed by a
//! mutex-guarded vector. Hosts swap in a real store; tests use this one
//! directly.

use std::sync::{Arc, Mutex};

use super::transactions_model::Transaction;
use super::TransactionRepositoryTrait;
use crate::errors::StoreError;
use crate::Result;
use async_trait::async_trait;

/// Thread-safe in-memory store of transaction records.
#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self {
            transactions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of stored records across all owners.
    pub fn len(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.transactions.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        if owner_id.trim().is_empty() {
            return Err(StoreError::NotAuthenticated.into());
        }
        let transactions = self.transactions.lock().unwrap();
        Ok(transactions
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, transaction: Transaction) -> Result<Transaction> {
        if transaction.owner_id.trim().is_empty() {
            return Err(StoreError::NotAuthenticated.into());
        }
        let mut transactions = self.transactions.lock().unwrap();
        transactions.push(transaction.clone());
        Ok(transaction)
    }
}
