use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::transactions::transactions_model::*;
use crate::transactions::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service for recording and listing transactions
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with an injected repository
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for emitting TransactionCreated events.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            owner_id: new_transaction.owner_id.clone(),
            occurred_at: new_transaction.occurred_at,
            kind: new_transaction.kind,
            quantity: new_transaction.quantity,
            unit_price: new_transaction.unit_price,
            gross_value: new_transaction.gross_value(),
            created_at: Utc::now(),
        };

        debug!(
            "Recording {} transaction {} for owner {}",
            transaction.kind.as_str(),
            transaction.id,
            transaction.owner_id
        );

        let created = self.transaction_repository.insert(transaction).await?;

        // Emit domain event so hosts can refresh the owner's ledger
        self.event_sink.emit(DomainEvent::transaction_created(
            created.owner_id.clone(),
            created.id.clone(),
        ));

        Ok(created)
    }

    async fn get_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut transactions = self.transaction_repository.list_by_owner(owner_id).await?;
        // Newest first for list views; equal dates keep store order
        transactions.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(transactions)
    }
}
