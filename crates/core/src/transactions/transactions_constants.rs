/// Transaction kinds
///
/// Each constant is the canonical wire label for one trade direction. The
/// labels are lowercase to match the persisted enum values.

/// Acquisition of the tracked asset. Increases holdings.
pub const TRANSACTION_TYPE_BUY: &str = "buy";

/// Disposal of the tracked asset. Decreases holdings.
pub const TRANSACTION_TYPE_SELL: &str = "sell";

/// Smallest quantity a single transaction may carry.
pub const MIN_TRADE_QUANTITY: &str = "0.000001";
