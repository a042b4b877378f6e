/// Validation of the amount field

use crate::core::error::{AppError, Result};

pub const EMPTY_AMOUNT: &str = "Enter an amount";
pub const INVALID_NUMBER: &str = "Invalid number";
pub const NEGATIVE_AMOUNT: &str = "Amount must be positive";

/// Parse the amount field into a non-negative, finite number.
///
/// Surrounding whitespace and `,` thousands separators are ignored.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() {
        return Err(AppError::Input(EMPTY_AMOUNT.to_string()));
    }

    // Whitespace can sit between the number and a removed separator ("1 ,")
    let amount: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| AppError::Input(INVALID_NUMBER.to_string()))?;

    if !amount.is_finite() {
        return Err(AppError::Input(INVALID_NUMBER.to_string()));
    }

    if amount < 0.0 {
        return Err(AppError::Input(NEGATIVE_AMOUNT.to_string()));
    }

    // -0.0 would otherwise render as "-0"
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_error(raw: &str) -> String {
        match parse_amount(raw) {
            Err(AppError::Input(msg)) => msg,
            other => panic!("expected input error for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_amounts() {
        assert_eq!(parse_amount("100"), Ok(100.0));
        assert_eq!(parse_amount("  2.5 "), Ok(2.5));
        assert_eq!(parse_amount("1,234,567.5"), Ok(1_234_567.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
        assert_eq!(parse_amount(".5"), Ok(0.5));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_whitespace_left_by_separators() {
        assert_eq!(parse_amount("1 ,"), Ok(1.0));
        assert_eq!(parse_amount(", 250"), Ok(250.0));
        assert_eq!(input_error(", ,"), INVALID_NUMBER);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let amount = parse_amount("-0").unwrap();
        assert_eq!(amount, 0.0);
        assert!(amount.is_sign_positive());
    }

    #[test]
    fn test_empty_amount() {
        assert_eq!(input_error(""), EMPTY_AMOUNT);
        assert_eq!(input_error("   "), EMPTY_AMOUNT);
        assert_eq!(input_error(",,"), EMPTY_AMOUNT);
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(input_error("abc"), INVALID_NUMBER);
        assert_eq!(input_error("1.2.3"), INVALID_NUMBER);
        assert_eq!(input_error("12abc"), INVALID_NUMBER);
        assert_eq!(input_error("inf"), INVALID_NUMBER);
        assert_eq!(input_error("NaN"), INVALID_NUMBER);
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(input_error("-5"), NEGATIVE_AMOUNT);
        assert_eq!(input_error("-0.01"), NEGATIVE_AMOUNT);
    }
}
