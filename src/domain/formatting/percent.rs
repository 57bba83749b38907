//! Percentage and duration display strings.

use super::currency::NOT_AVAILABLE;
use crate::domain::calculator::PaybackPeriod;

/// Formats a percentage with two decimals, e.g. `43.48%`.
///
/// Ties round half away from zero (`12.125` shows as `12.13%`).
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2}%", round_half_away(value, 2))
}

/// Formats a payback period with one decimal, e.g. `8.4 months`.
pub fn format_months(period: &PaybackPeriod) -> String {
    match period.months() {
        Some(months) if months.is_finite() => {
            format!("{:.1} months", round_half_away(months, 1))
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Rounds to `decimals` places, ties away from zero. A result of zero is
/// returned unsigned.
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
