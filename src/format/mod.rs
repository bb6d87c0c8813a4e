// src/format/mod.rs
//
// Amount display: "$" + number right-aligned in a 16-wide field,
// 4 fraction digits, "," every three integer digits.
//
//   "1234567.5" -> "$  1,234,567.5000"
//   "-5"        -> "$         -5.0000"
//   "abc"       -> "$          0.0000"
//
// Total: every input produces a display string. Pure; no logging here.

pub mod fixed;
pub mod parse;

use thousands::Separable;

use crate::config::consts::{FIELD_WIDTH, FRACTION_DIGITS, SYMBOL};
use crate::config::options::FormatOptions;

pub use fixed::to_fixed;
pub use parse::{parse_amount, parse_leading};

/// Format element text with the default options (ties to even).
pub fn format_amount(input: &str) -> String {
    format_amount_with(input, &FormatOptions::default())
}

pub fn format_amount_with(input: &str, opts: &FormatOptions) -> String {
    format_value(parse_amount(input), opts)
}

/// Format an already-parsed amount. Non-finite values display as zero.
pub fn format_value(value: f64, opts: &FormatOptions) -> String {
    let value = if value.is_finite() && value != 0.0 { value } else { 0.0 };
    let fixed = to_fixed(value, FRACTION_DIGITS, opts.rounding);
    // Only the integer digits are grouped; sign and fraction pass through.
    let grouped = fixed.separate_with_commas();
    format!("{}{:>width$}", SYMBOL, grouped, width = FIELD_WIDTH)
}

/// What any unparseable input turns into.
pub fn zero_amount() -> String {
    format_value(0.0, &FormatOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::Rounding;

    const ZERO: &str = "$          0.0000";

    #[test]
    fn empty_and_garbage_are_zero() {
        assert_eq!(format_amount(""), ZERO);
        assert_eq!(format_amount("abc"), ZERO);
        assert_eq!(format_amount("   "), ZERO);
        assert_eq!(zero_amount(), ZERO);
        assert_eq!(ZERO.chars().count(), 1 + FIELD_WIDTH);
    }

    #[test]
    fn small_values_are_padded() {
        assert_eq!(format_amount("5"), "$          5.0000");
        assert_eq!(format_amount("12.5abc"), "$         12.5000");
        assert_eq!(format_amount("999.99999"), "$      1,000.0000");
    }

    #[test]
    fn negatives_keep_symbol_first() {
        assert_eq!(format_amount("-5"), "$         -5.0000");
        assert_eq!(format_amount("-1234.5"), "$     -1,234.5000");
        assert_eq!(format_amount("-0"), ZERO);
    }

    #[test]
    fn grouping_in_output() {
        assert_eq!(format_amount("1234567"), "$  1,234,567.0000");
        assert_eq!(format_amount("1234567.5"), "$  1,234,567.5000");
        assert_eq!(format_amount("100000"), "$    100,000.0000");
        assert_eq!(format_amount("999.9999"), "$        999.9999");
        assert_eq!(format_amount("-123456"), "$   -123,456.0000");
        assert_eq!(format_amount("0.12345678"), "$          0.1235");
    }

    #[test]
    fn wide_values_are_not_truncated() {
        let out = format_amount("123456789012");
        assert_eq!(out, "$123,456,789,012.0000");
        assert!(out.len() > 1 + FIELD_WIDTH);
    }

    #[test]
    fn reformatting_output_degrades_to_zero() {
        let once = format_amount("5");
        assert_eq!(format_amount(&once), ZERO);
        assert_eq!(format_amount(&format_amount("-1234.5")), ZERO);
    }

    #[test]
    fn rounding_mode_only_matters_on_ties() {
        let away = FormatOptions { rounding: Rounding::HalfAwayFromZero };
        assert_eq!(format_amount("0.03125"), "$          0.0312");
        assert_eq!(format_amount_with("0.03125", &away), "$          0.0313");
        assert_eq!(format_amount_with("2.71828", &away), format_amount("2.71828"));
    }

    #[test]
    fn non_finite_values_display_as_zero() {
        let opts = FormatOptions::default();
        assert_eq!(format_value(f64::NAN, &opts), ZERO);
        assert_eq!(format_value(f64::INFINITY, &opts), ZERO);
        assert_eq!(format_value(-0.0, &opts), ZERO);
    }
}
