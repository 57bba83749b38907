//! Indian rupee formatting (en-IN locale, no fraction digits).

/// Rupee sign prefixed to every amount.
pub const RUPEE_SYMBOL: &str = "₹";

/// Placeholder for amounts that cannot be displayed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// The last three digits form one group and every two digits above that
/// form another (`₹1,23,45,678`). Amounts are rounded half away from zero.
/// Anything that rounds to zero prints without a sign, and non-finite
/// amounts print as `N/A`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_indian(&digits);

    if rounded < 0.0 {
        format!("-{}{}", RUPEE_SYMBOL, grouped)
    } else {
        format!("{}{}", RUPEE_SYMBOL, grouped)
    }
}

/// Compact axis label in millions, e.g. `₹1.5M`.
///
/// The quotient is printed unrounded in its shortest form, so `137500`
/// becomes `₹0.1375M` and `2000000` becomes `₹2M`. Negative values keep
/// the sign after the rupee symbol, as axis ticks do (`₹-0.25M`).
pub fn format_millions(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let millions = amount / 1_000_000.0;
    // -0.0 would print as "-0"
    let millions = if millions == 0.0 { 0.0 } else { millions };
    format!("{}{}M", RUPEE_SYMBOL, millions)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(7.0), "₹7");
        assert_eq!(format_inr(999.0), "₹999");
    }

    #[test]
    fn thousands_use_single_separator() {
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(99_999.0), "₹99,999");
    }

    #[test]
    fn lakhs_and_crores_use_indian_grouping() {
        assert_eq!(format_inr(150_000.0), "₹1,50,000");
        assert_eq!(format_inr(1_150_000.0), "₹11,50,000");
        assert_eq!(format_inr(10_000_000.0), "₹1,00,00,000");
        assert_eq!(format_inr(12_345_678_901.0), "₹12,34,56,78,901");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_inr(-500_000.0), "-₹5,00,000");
        assert_eq!(format_inr(-12.0), "-₹12");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_inr(999.5), "₹1,000");
        assert_eq!(format_inr(1_234.49), "₹1,234");
        assert_eq!(format_inr(-2.5), "-₹3");
    }

    #[test]
    fn values_rounding_to_zero_are_unsigned() {
        assert_eq!(format_inr(-0.4), "₹0");
        assert_eq!(format_inr(-0.0), "₹0");
    }

    #[test]
    fn non_finite_amounts_are_not_available() {
        assert_eq!(format_inr(f64::INFINITY), "N/A");
        assert_eq!(format_inr(f64::NAN), "N/A");
    }

    #[test]
    fn millions_print_shortest_unrounded_quotient() {
        assert_eq!(format_millions(1_500_000.0), "₹1.5M");
        assert_eq!(format_millions(2_000_000.0), "₹2M");
        assert_eq!(format_millions(0.0), "₹0M");
        assert_eq!(format_millions(-0.0), "₹0M");
        assert_eq!(format_millions(137_500.0), "₹0.1375M");
        assert_eq!(format_millions(-250_000.0), "₹-0.25M");
    }
}
