#[cfg(test)]
mod tests {
    use crate::errors::{Error, StoreError};
    use crate::ledger::{LedgerService, LedgerServiceTrait};
    use crate::transactions::{
        InMemoryTransactionRepository, Transaction, TransactionRepositoryTrait, TransactionType,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;
    use std::sync::Arc;

    // ============================================================================
    // Mock Repository
    // ============================================================================

    struct FailingTransactionRepository;

    #[async_trait]
    impl TransactionRepositoryTrait for FailingTransactionRepository {
        async fn list_by_owner(&self, _owner_id: &str) -> crate::Result<Vec<Transaction>> {
            Err(StoreError::Unavailable("connection refused".to_string()).into())
        }

        async fn insert(&self, _transaction: Transaction) -> crate::Result<Transaction> {
            Err(StoreError::Unavailable("connection refused".to_string()).into())
        }
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn stored_transaction(
        id: &str,
        owner_id: &str,
        kind: TransactionType,
        date_str: &str,
        quantity: Decimal,
        unit_price: Decimal,
        gross_value: Decimal,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            occurred_at: NaiveDate::from_str(date_str).unwrap(),
            kind,
            quantity,
            unit_price,
            gross_value,
            created_at: Utc::now(),
        }
    }

    async fn seeded_repository(transactions: Vec<Transaction>) -> InMemoryTransactionRepository {
        let repository = InMemoryTransactionRepository::new();
        for transaction in transactions {
            repository.insert(transaction).await.unwrap();
        }
        repository
    }

    // ============================================================================
    // Ledger Service Tests
    // ============================================================================

    #[tokio::test]
    async fn test_calculate_ledger_over_stored_history() {
        let repository = seeded_repository(vec![
            stored_transaction(
                "a",
                "user-1",
                TransactionType::Buy,
                "2024-01-01",
                dec!(10),
                dec!(100),
                dec!(1000),
            ),
            stored_transaction(
                "b",
                "user-1",
                TransactionType::Sell,
                "2024-02-01",
                dec!(4),
                dec!(150),
                dec!(600),
            ),
        ])
        .await;
        let service = LedgerService::new(Arc::new(repository));

        let ledger = service.calculate_ledger("user-1").await.unwrap();

        assert_eq!(ledger.annotated.len(), 2);
        assert_eq!(ledger.annotated[0].realized_pnl, Decimal::ZERO);
        assert_eq!(ledger.annotated[1].realized_pnl, dec!(200));

        let summary = &ledger.summary;
        assert_eq!(summary.current_balance, dec!(6));
        assert_eq!(summary.total_invested, dec!(1000));
        assert_eq!(summary.total_proceeds, dec!(600));
        assert_eq!(summary.total_realized_pnl, dec!(200));
        assert_eq!(summary.average_buy_price, dec!(100));
        assert_eq!(summary.buy_count, 1);
        assert_eq!(summary.sell_count, 1);
    }

    #[tokio::test]
    async fn test_calculate_ledger_scopes_to_owner() {
        let repository = seeded_repository(vec![
            stored_transaction(
                "a",
                "user-1",
                TransactionType::Buy,
                "2024-01-01",
                dec!(10),
                dec!(100),
                dec!(1000),
            ),
            stored_transaction(
                "b",
                "user-2",
                TransactionType::Buy,
                "2024-01-01",
                dec!(500),
                dec!(100),
                dec!(50000),
            ),
        ])
        .await;
        let service = LedgerService::new(Arc::new(repository));

        let ledger = service.calculate_ledger("user-1").await.unwrap();

        assert_eq!(ledger.annotated.len(), 1);
        assert_eq!(ledger.summary.current_balance, dec!(10));
        assert_eq!(ledger.summary.total_invested, dec!(1000));
    }

    #[tokio::test]
    async fn test_calculate_ledger_for_owner_without_history() {
        let repository = seeded_repository(vec![]).await;
        let service = LedgerService::new(Arc::new(repository));

        let ledger = service.calculate_ledger("user-1").await.unwrap();

        assert!(ledger.annotated.is_empty());
        assert_eq!(ledger.summary.current_balance, Decimal::ZERO);
        assert_eq!(ledger.summary.buy_count, 0);
        assert_eq!(ledger.summary.sell_count, 0);
    }

    #[tokio::test]
    async fn test_calculate_ledger_rounds_derived_figures() {
        // Gross of 100 across 3 units leaves a repeating average; the
        // service trims those artifacts to display precision while the
        // stored sums stay exact.
        let repository = seeded_repository(vec![
            stored_transaction(
                "a",
                "user-1",
                TransactionType::Buy,
                "2024-01-01",
                dec!(3),
                dec!(33.33),
                dec!(100),
            ),
            stored_transaction(
                "b",
                "user-1",
                TransactionType::Sell,
                "2024-01-02",
                dec!(1),
                dec!(40),
                dec!(40),
            ),
        ])
        .await;
        let service = LedgerService::new(Arc::new(repository));

        let ledger = service.calculate_ledger("user-1").await.unwrap();

        assert_eq!(ledger.annotated[1].realized_pnl, dec!(6.67));
        assert_eq!(ledger.summary.total_realized_pnl, dec!(6.67));
        assert_eq!(ledger.summary.average_buy_price, dec!(33.33));
        assert_eq!(ledger.summary.cumulative_pnl.len(), 1);
        assert_eq!(ledger.summary.cumulative_pnl[0].cumulative_pnl, dec!(6.67));

        assert_eq!(ledger.summary.total_invested, dec!(100));
        assert_eq!(ledger.summary.total_proceeds, dec!(40));
        assert_eq!(ledger.summary.current_balance, dec!(2));
    }

    #[tokio::test]
    async fn test_calculate_ledger_requires_owner() {
        let repository = seeded_repository(vec![]).await;
        let service = LedgerService::new(Arc::new(repository));

        let result = service.calculate_ledger("   ").await;

        assert!(matches!(
            result,
            Err(Error::Store(StoreError::NotAuthenticated))
        ));
    }

    #[tokio::test]
    async fn test_calculate_ledger_propagates_store_failure() {
        let service = LedgerService::new(Arc::new(FailingTransactionRepository));

        let result = service.calculate_ledger("user-1").await;

        assert!(matches!(
            result,
            Err(Error::Store(StoreError::Unavailable(_)))
        ));
    }
}
