//! Ledger module - chronological normalization, cost-basis annotation, and
//! summary aggregation over transaction records.

mod ledger_calculator;
mod ledger_model;
mod ledger_service;


#[cfg(test)]
mod ledger_service_tests;

pub use ledger_calculator::{
    annotate_transactions, compute_ledger, normalize_transactions, summarize_transactions,
};
pub use ledger_model::{AnnotatedTransaction, InventoryState, Ledger, LedgerSummary, PnlPoint};
pub use ledger_service::{LedgerService, LedgerServiceTrait};
