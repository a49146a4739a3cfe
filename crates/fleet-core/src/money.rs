use rust_decimal::Decimal;

/// Number of fractional digits carried by money columns.
pub const MONEY_SCALE: u32 = 2;

/// Format a money amount with exactly two fractional digits ("150.00").
pub fn format_money(value: Decimal) -> String {
    let mut v = value.round_dp(MONEY_SCALE);
    v.rescale(MONEY_SCALE);
    v.to_string()
}
