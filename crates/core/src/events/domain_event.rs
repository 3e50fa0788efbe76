//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about ledger data changes. Runtime adapters
/// translate them into platform-specific actions; the expected response to
/// any of them is a fresh fetch-and-recompute of the owner's ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A transaction was recorded through this process.
    TransactionCreated {
        owner_id: String,
        transaction_id: String,
    },

    /// The backing store reported an out-of-band change to an owner's
    /// transactions (another session wrote). Emitted by host adapters that
    /// subscribe to store push notifications.
    TransactionsChanged { owner_id: String },
}

impl DomainEvent {
    /// Creates a TransactionCreated event.
    pub fn transaction_created(owner_id: String, transaction_id: String) -> Self {
        Self::TransactionCreated {
            owner_id,
            transaction_id,
        }
    }

    /// Creates a TransactionsChanged event.
    pub fn transactions_changed(owner_id: String) -> Self {
        Self::TransactionsChanged { owner_id }
    }

    /// Returns the owner whose ledger the event invalidates.
    pub fn owner_id(&self) -> &str {
        match self {
            Self::TransactionCreated { owner_id, .. } => owner_id,
            Self::TransactionsChanged { owner_id } => owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_serialization() {
        let event =
            DomainEvent::transaction_created("user-1".to_string(), "txn-42".to_string());

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("transaction_created"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::TransactionCreated {
                owner_id,
                transaction_id,
            } => {
                assert_eq!(owner_id, "user-1");
                assert_eq!(transaction_id, "txn-42");
            }
            _ => panic!("Expected TransactionCreated"),
        }
    }

    #[test]
    fn test_transactions_changed_serialization() {
        let event = DomainEvent::transactions_changed("user-1".to_string());

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();

        match deserialized {
            DomainEvent::TransactionsChanged { owner_id } => {
                assert_eq!(owner_id, "user-1");
            }
            _ => panic!("Expected TransactionsChanged"),
        }
    }

    #[test]
    fn test_owner_id_accessor() {
        let created =
            DomainEvent::transaction_created("user-1".to_string(), "txn-42".to_string());
        let changed = DomainEvent::transactions_changed("user-2".to_string());

        assert_eq!(created.owner_id(), "user-1");
        assert_eq!(changed.owner_id(), "user-2");
    }
}
