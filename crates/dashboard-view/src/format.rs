//! Number formatting for Indian market display.

use rust_decimal::Decimal;

/// Rupee amount with en-IN digit grouping, e.g. `₹12,34,567.89`.
pub fn format_inr(value: Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", value.abs().round_dp(2));
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}₹{}.{frac_part}", group_indian(int_part))
}

/// Last three digits, then groups of two: `1234567` -> `12,34,567`.
fn group_indian(int_part: &str) -> String {
    if int_part.len() <= 3 {
        return int_part.to_string();
    }

    let (head, tail) = int_part.split_at(int_part.len() - 3);
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

/// Volume in crores, lakhs or thousands.
pub fn format_volume(volume: f64) -> String {
    if volume >= 10_000_000.0 {
        format!("{:.2} Cr", volume / 10_000_000.0)
    } else if volume >= 100_000.0 {
        format!("{:.2} L", volume / 100_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.2} K", volume / 1_000.0)
    } else {
        volume.to_string()
    }
}

/// Signed percentage with two decimals, e.g. `+1.25%`.
pub fn format_change_percent(value: Decimal) -> String {
    let sign = if value >= Decimal::ZERO { "+" } else { "" };
    format!("{sign}{:.2}%", value.round_dp(2))
}
