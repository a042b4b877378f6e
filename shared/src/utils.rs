//! # Shared Utility Functions
//!
//! Display formatting for converted amounts and rates.
//!
//! ## Number Formatting
//!
//! - [`format_number`] - Magnitude-aware formatting used for every amount and rate shown
//! - [`group_thousands`] - Insert `,` separators into a plain decimal string
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_number;
//!
//! assert_eq!(format_number(1_234_567.891), "1,234,567.89");
//! assert_eq!(format_number(1234.5), "1,234.5");
//! assert_eq!(format_number(0.000001), "0.000001");
//! assert_eq!(format_number(0.0), "0");
//! ```

/// Amounts at or above this are shown with exactly two decimals.
const LARGE_AMOUNT: f64 = 1_000_000.0;

/// Format a non-negative, finite number for display.
///
/// - `n >= 1,000,000`: two decimals, grouped (`1,234,567.89`)
/// - `1 <= n < 1,000,000`: up to four decimals, grouped, trailing zeros dropped (`1,234.5`)
/// - `0 <= n < 1`: up to six decimals, trailing zeros dropped (`0.000001`, `0`)
///
/// Callers validate the input; negative or non-finite values are not expected here.
pub fn format_number(n: f64) -> String {
    if n >= LARGE_AMOUNT {
        return group_thousands(&format!("{:.2}", n));
    }
    if n >= 1.0 {
        return strip_fraction(&group_thousands(&format!("{:.4}", n))).to_string();
    }
    strip_fraction(&format!("{:.6}", n)).to_string()
}

/// Insert `,` every three digits of the integer part of a plain decimal string.
///
/// # Examples
///
/// ```rust
/// use shared::utils::group_thousands;
///
/// assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
/// assert_eq!(group_thousands("100"), "100");
/// ```
pub fn group_thousands(formatted: &str) -> String {
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted, None),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    match decimal_part {
        Some(decimal) => format!("{}.{}", integer_with_commas, decimal),
        None => integer_with_commas,
    }
}

/// Drop trailing zeros after the decimal point, then a dangling point.
fn strip_fraction(formatted: &str) -> &str {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted.trim_end_matches('0').trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_small_values() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.92), "0.92");
        assert_eq!(format_number(0.1234567), "0.123457");
        assert_eq!(format_number(0.0000004), "0");
    }

    #[test]
    fn test_format_number_mid_range() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(92.00000000000001), "92");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(999_999.5), "999,999.5");
        assert_eq!(format_number(12.3456), "12.3456");
    }

    #[test]
    fn test_format_number_large_values() {
        assert_eq!(format_number(1_234_567.891), "1,234,567.89");
        assert_eq!(format_number(1_000_000.0), "1,000,000.00");
        assert_eq!(format_number(123_456_789_012.0), "123,456,789,012.00");
    }

    #[test]
    fn test_format_number_rounds_before_stripping() {
        assert_eq!(format_number(999_999.99999), "1,000,000");
        assert_eq!(format_number(0.9999999), "1");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("0.5"), "0.5");
    }

    #[test]
    fn test_strip_fraction_leaves_integers_alone() {
        assert_eq!(strip_fraction("100"), "100");
        assert_eq!(strip_fraction("1,000.0000"), "1,000");
        assert_eq!(strip_fraction("0.000000"), "0");
    }
}
