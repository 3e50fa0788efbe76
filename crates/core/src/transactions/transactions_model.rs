//! Transaction domain models.

use crate::transactions::transactions_constants::{
    MIN_TRADE_QUANTITY, TRANSACTION_TYPE_BUY, TRANSACTION_TYPE_SELL,
};
use crate::transactions::TransactionError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Smallest quantity a transaction may carry.
pub fn min_trade_quantity() -> Decimal {
    Decimal::from_str_radix(MIN_TRADE_QUANTITY, 10).unwrap_or_else(|_| Decimal::new(1, 6))
}

/// Trade direction of a transaction.
///
/// Exactly two kinds exist; a record's kind is immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    /// Canonical wire label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            other => Err(TransactionError::InvalidData(format!(
                "Unknown transaction type '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing one recorded trade.
///
/// Records are immutable inputs to the ledger computation; the engine never
/// mutates them and always produces annotated copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    // Identity
    pub id: String,
    pub owner_id: String,

    // Trade
    pub occurred_at: NaiveDate,
    pub kind: TransactionType,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// `quantity * unit_price`, computed once at creation. Authoritative
    /// thereafter; the ledger never recomputes it from quantity and price.
    pub gross_value: Decimal,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Quantity signed by trade direction: positive for buys, negative for
    /// sells. Summing this over a history yields the running balance.
    pub fn signed_quantity(&self) -> Decimal {
        match self.kind {
            TransactionType::Buy => self.quantity,
            TransactionType::Sell => -self.quantity,
        }
    }
}

/// Input model for recording a new transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub owner_id: String,
    pub occurred_at: NaiveDate,
    pub kind: TransactionType,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> std::result::Result<(), TransactionError> {
        if self.owner_id.trim().is_empty() {
            return Err(TransactionError::InvalidData(
                "Owner ID cannot be empty".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(
                "Quantity must be positive".to_string(),
            ));
        }
        if self.quantity < min_trade_quantity() {
            return Err(TransactionError::InvalidData(format!(
                "Quantity must be at least {}",
                MIN_TRADE_QUANTITY
            )));
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(TransactionError::InvalidData(
                "Unit price must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Gross fiat value of the trade, fixed at recording time.
    pub fn gross_value(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}
