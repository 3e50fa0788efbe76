//! Ledger domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::Transaction;

/// Running inventory state for one cost-basis pass.
///
/// Owned exclusively by the annotation walk and discarded afterwards; no
/// state survives between computations. Weighted-average cost method: the
/// average re-forms on every acquisition and carries unchanged through
/// disposals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryState {
    /// Cumulative net holdings. Goes negative when sells exceed recorded
    /// buys; that excursion is accepted, not rejected or clamped.
    pub running_quantity: Decimal,
    /// Cumulative cost attributed to `running_quantity`. Forced to zero
    /// whenever `running_quantity` is not positive.
    pub total_cost_basis: Decimal,
    /// `total_cost_basis / running_quantity` while holdings are positive,
    /// zero otherwise.
    pub average_unit_cost: Decimal,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an acquisition: basis and holdings grow, the average cost is
    /// re-derived over the whole position.
    pub fn apply_buy(&mut self, quantity: Decimal, gross_value: Decimal) {
        self.total_cost_basis += gross_value;
        self.running_quantity += quantity;
        self.average_unit_cost = if self.running_quantity > Decimal::ZERO {
            self.total_cost_basis / self.running_quantity
        } else {
            Decimal::ZERO
        };
    }

    /// Applies a disposal and returns the realized profit/loss: proceeds
    /// minus the average-cost basis of the disposed quantity.
    ///
    /// The average cost is not recomputed here. While holdings stay
    /// positive the basis is rebased at the unchanged average; once
    /// holdings reach zero or below, basis and average both reset to zero,
    /// so any further disposal realizes its full gross value.
    pub fn apply_sell(&mut self, quantity: Decimal, gross_value: Decimal) -> Decimal {
        let cost_of_sale = self.average_unit_cost * quantity;
        let realized_pnl = gross_value - cost_of_sale;

        self.running_quantity -= quantity;
        if self.running_quantity > Decimal::ZERO {
            self.total_cost_basis = self.average_unit_cost * self.running_quantity;
        } else {
            self.total_cost_basis = Decimal::ZERO;
            self.average_unit_cost = Decimal::ZERO;
        }

        realized_pnl
    }
}

/// A transaction record together with its realized profit/loss.
///
/// Realized P/L is meaningful for sells; buys always carry zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedTransaction {
    pub transaction: Transaction,
    pub realized_pnl: Decimal,
}

/// One point of the cumulative realized P/L series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlPoint {
    pub date: NaiveDate,
    pub cumulative_pnl: Decimal,
}

/// Aggregate metrics over an annotated transaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// Signed quantity sum: buys add, sells subtract. Negative under
    /// oversell.
    pub current_balance: Decimal,
    /// Gross value sum over buys.
    pub total_invested: Decimal,
    /// Gross value sum over sells.
    pub total_proceeds: Decimal,
    /// Realized P/L sum over sells.
    pub total_realized_pnl: Decimal,
    /// `total_invested` divided by the bought quantity, zero when no buys
    /// exist.
    pub average_buy_price: Decimal,
    /// Sell-only running realized P/L in chronological order, for charting.
    pub cumulative_pnl: Vec<PnlPoint>,
    pub buy_count: usize,
    pub sell_count: usize,
}

/// Full output of a ledger computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// The input records in chronological order, each annotated with
    /// realized P/L.
    pub annotated: Vec<AnnotatedTransaction>,
    pub summary: LedgerSummary,
}
