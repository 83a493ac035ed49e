//! Utility functions for formatting and common operations
//!
//! This module provides centralized formatting utilities for consistent
//! display of currency and percentage values throughout the application.

use rust_decimal::Decimal;

/// Currency symbol options for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// Include the " €" suffix (euro)
    Eur,
    /// No currency symbol (for percentage values, calculations display)
    None,
}

/// Core formatting function with full control over output.
///
/// Formats a Decimal value using Italian locale conventions:
/// - Thousands separator: `.` (period)
/// - Decimal separator: `,` (comma)
///
/// # Examples
/// ```
/// use fondo::utils::{format_amount, CurrencySymbol};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1234.56), CurrencySymbol::Eur), "1.234,56 €");
/// assert_eq!(format_amount(dec!(1234), CurrencySymbol::None), "1.234,00");
/// ```
pub fn format_amount(value: Decimal, symbol: CurrencySymbol) -> String {
    let is_negative = value < Decimal::ZERO;
    let abs_value = value.abs();

    // Round to 2 decimal places and format
    let formatted = format!("{:.2}", abs_value);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = parts.get(1).unwrap_or(&"00");

    // Add thousands separators (.) to integer part
    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    let suffix = match symbol {
        CurrencySymbol::Eur => " €",
        CurrencySymbol::None => "",
    };

    format!("{}{},{}{}", sign, with_separators, decimal_part, suffix)
}

/// Format as euro with symbol: "1.234,56 €"
///
/// # Examples
/// ```
/// use fondo::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.56)), "1.234,56 €");
/// assert_eq!(format_currency(dec!(-500)), "-500,00 €");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_amount(value, CurrencySymbol::Eur)
}

/// Format a ratio as a percentage: 0.0075 becomes "0,75%"
///
/// # Examples
/// ```
/// use fondo::utils::format_percent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_percent(dec!(0.0075)), "0,75%");
/// assert_eq!(format_percent(dec!(0.10)), "10,00%");
/// ```
pub fn format_percent(ratio: Decimal) -> String {
    format!(
        "{}%",
        format_amount(ratio * Decimal::from(100), CurrencySymbol::None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(dec!(1234.56)), "1.234,56 €");
        assert_eq!(format_currency(dec!(0.99)), "0,99 €");
        assert_eq!(format_currency(dec!(1000000)), "1.000.000,00 €");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(dec!(0)), "0,00 €");
        assert_eq!(format_currency(dec!(0.01)), "0,01 €");
        assert_eq!(format_currency(dec!(1)), "1,00 €");
        assert_eq!(format_currency(dec!(123)), "123,00 €");
        assert_eq!(format_currency(dec!(999.99)), "999,99 €");
    }

    #[test]
    fn test_format_currency_large_values() {
        assert_eq!(format_currency(dec!(1000)), "1.000,00 €");
        assert_eq!(format_currency(dec!(12345)), "12.345,00 €");
        assert_eq!(format_currency(dec!(1234567)), "1.234.567,00 €");
        assert_eq!(format_currency(dec!(12345678.90)), "12.345.678,90 €");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.56)), "-1.234,56 €");
        assert_eq!(format_currency(dec!(-0.01)), "-0,01 €");
    }

    #[test]
    fn test_format_percent_from_ratio() {
        assert_eq!(format_percent(dec!(0)), "0,00%");
        assert_eq!(format_percent(dec!(0.0075)), "0,75%");
        assert_eq!(format_percent(dec!(0.10)), "10,00%");
        assert_eq!(format_percent(dec!(-0.055)), "-5,50%");
        assert_eq!(format_percent(dec!(12.5)), "1.250,00%");
    }
}
