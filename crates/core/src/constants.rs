/// Decimal precision for display-facing derived values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
