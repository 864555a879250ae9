//! Shared primitive types used across the simulator.

/// A currency amount in dollars. f64 on purpose: the source of funds
/// is free-form text and a failed parse must flow through as NaN,
/// making every affordability check false.
pub type Money = f64;

/// Format an amount as a dollar string with exactly two decimal
/// places, e.g. `$123.46`. Every emitted status line uses this.
pub fn format_usd(amount: Money) -> String {
    format!("${amount:.2}")
}
