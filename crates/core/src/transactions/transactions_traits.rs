use super::transactions_model::*;
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Transaction repository operations.
///
/// Hosts implement this against their backing store. Implementations must
/// scope every query to the explicitly passed owner; there is no ambient
/// session fallback.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Fetches all transactions recorded for the given owner.
    ///
    /// Ordering is unspecified; callers that need chronological or
    /// newest-first order sort the result themselves. Fails with
    /// `StoreError::NotAuthenticated` when no valid owner identity is
    /// available and `StoreError::Unavailable` on backend failure.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Transaction>>;

    /// Persists a fully populated transaction record.
    async fn insert(&self, transaction: Transaction) -> Result<Transaction>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validates and records a new transaction.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Returns the owner's transactions, newest first.
    async fn get_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>>;
}
