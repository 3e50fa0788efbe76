//! Pure ledger computation: chronological normalization, cost-basis
//! annotation, and summary aggregation.
//!
//! Every function here is total over structurally valid input and keeps no
//! state between calls; a full recompute walks the entire history each time.

use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::ledger::ledger_model::{
    AnnotatedTransaction, InventoryState, Ledger, LedgerSummary, PnlPoint,
};
use crate::transactions::{Transaction, TransactionType};

/// Sorts a raw transaction collection into canonical chronological order.
///
/// Records with equal dates retain their relative input order (stable
/// sort); the record carries no finer-grained ordering field. Empty input
/// yields empty output.
pub fn normalize_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut ordered = transactions.to_vec();
    ordered.sort_by_key(|transaction| transaction.occurred_at);
    ordered
}

/// Walks a chronologically ordered sequence once and attaches realized
/// profit/loss to every record.
///
/// Input records are never mutated; the output is a same-length sequence of
/// annotated copies in the same order. Buys always realize zero. A sell
/// realizes proceeds minus the average-cost basis of the disposed quantity,
/// which is the full gross value when nothing was held beforehand.
pub fn annotate_transactions(ordered: &[Transaction]) -> Vec<AnnotatedTransaction> {
    let mut state = InventoryState::new();

    ordered
        .iter()
        .map(|transaction| {
            let realized_pnl = match transaction.kind {
                TransactionType::Buy => {
                    state.apply_buy(transaction.quantity, transaction.gross_value);
                    Decimal::ZERO
                }
                TransactionType::Sell => {
                    if transaction.quantity > state.running_quantity {
                        warn!(
                            "Sell {} quantity {} exceeds held quantity {}; running balance goes negative",
                            transaction.id, transaction.quantity, state.running_quantity
                        );
                    }
                    state.apply_sell(transaction.quantity, transaction.gross_value)
                }
            };

            AnnotatedTransaction {
                transaction: transaction.clone(),
                realized_pnl,
            }
        })
        .collect()
}

/// Reduces an annotated sequence into summary metrics.
///
/// All reductions are order-independent sums except the cumulative P/L
/// series, which relies on the chronological order produced by
/// [`normalize_transactions`].
pub fn summarize_transactions(annotated: &[AnnotatedTransaction]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    let mut buy_quantity = Decimal::ZERO;
    let mut running_pnl = Decimal::ZERO;

    for record in annotated {
        let transaction = &record.transaction;
        summary.current_balance += transaction.signed_quantity();

        match transaction.kind {
            TransactionType::Buy => {
                summary.total_invested += transaction.gross_value;
                buy_quantity += transaction.quantity;
                summary.buy_count += 1;
            }
            TransactionType::Sell => {
                summary.total_proceeds += transaction.gross_value;
                summary.total_realized_pnl += record.realized_pnl;
                running_pnl += record.realized_pnl;
                summary.cumulative_pnl.push(PnlPoint {
                    date: transaction.occurred_at,
                    cumulative_pnl: running_pnl,
                });
                summary.sell_count += 1;
            }
        }
    }

    summary.average_buy_price = if buy_quantity > Decimal::zero() {
        summary.total_invested / buy_quantity
    } else {
        Decimal::zero()
    };

    summary
}

/// Computes the full ledger view over a set of transaction records.
///
/// Normalizes, annotates, and summarizes in one pass chain. Pure and total:
/// the same input always yields identical output, and permuting the input
/// changes nothing but the relative order of same-date records.
pub fn compute_ledger(transactions: &[Transaction]) -> Ledger {
    let ordered = normalize_transactions(transactions);
    let annotated = annotate_transactions(&ordered);
    let summary = summarize_transactions(&annotated);

    debug!(
        "Computed ledger over {} records: balance {}, realized P/L {}",
        annotated.len(),
        summary.current_balance,
        summary.total_realized_pnl
    );

    Ledger { annotated, summary }
}
