use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places using decimal arithmetic.
///
/// Values that cannot be represented as `Decimal` (non-finite or huge) fall
/// back to binary rounding.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| (value * 100.0).round() / 100.0)
}

#[must_use]
pub fn midpoint(min_y: f64, max_y: f64) -> f64 {
    (min_y + max_y) / 2.0
}

/// Compact label for an axis value: at most two decimals, no trailing zeros.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    let rounded = round_to_cents(value);
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}
