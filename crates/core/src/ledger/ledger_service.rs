use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::ledger::ledger_calculator::compute_ledger;
use crate::ledger::ledger_model::Ledger;
use crate::transactions::TransactionRepositoryTrait;
use crate::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

// Define the trait for the ledger service
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Fetches the owner's full transaction history and computes the ledger
    /// view from scratch. Hosts call this once per view request and again
    /// for every change event; a newer result supersedes an older one.
    async fn calculate_ledger(&self, owner_id: &str) -> Result<Ledger>;
}

pub struct LedgerService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl LedgerService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        LedgerService {
            transaction_repository,
        }
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn calculate_ledger(&self, owner_id: &str) -> Result<Ledger> {
        debug!("Calculating ledger for owner {}", owner_id);

        let transactions = self.transaction_repository.list_by_owner(owner_id).await?;
        let mut ledger = compute_ledger(&transactions);
        round_derived_values(&mut ledger);

        Ok(ledger)
    }
}

/// Rounds the division-derived values for display consumers.
///
/// Stored quantities and gross-value sums pass through exact; only realized
/// P/L figures and the average buy price carry division artifacts.
fn round_derived_values(ledger: &mut Ledger) {
    for record in &mut ledger.annotated {
        record.realized_pnl = record.realized_pnl.round_dp(DISPLAY_DECIMAL_PRECISION);
    }

    let summary = &mut ledger.summary;
    summary.total_realized_pnl = summary.total_realized_pnl.round_dp(DISPLAY_DECIMAL_PRECISION);
    summary.average_buy_price = summary.average_buy_price.round_dp(DISPLAY_DECIMAL_PRECISION);
    for point in &mut summary.cumulative_pnl {
        point.cumulative_pnl = point.cumulative_pnl.round_dp(DISPLAY_DECIMAL_PRECISION);
    }
}
