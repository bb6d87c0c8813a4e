// src/format/fixed.rs
use crate::config::options::Rounding;

/// Render `value` with exactly `digits` fraction digits.
///
/// Rounding works on the exact binary value, so only values that are exactly
/// halfway (`0.03125`, not `0.00005`) ever reach the tie rule.
pub fn to_fixed(value: f64, digits: usize, rounding: Rounding) -> String {
    if rounding == Rounding::HalfAwayFromZero {
        if let Some(s) = tie_away_from_zero(value, digits) {
            return s;
        }
    }
    // std rounds ties to even
    format!("{:.*}", digits, value)
}

/// `value` is an exact tie iff `|value| * 2^(digits+1)` is an odd integer `m`.
/// The away-from-zero neighbour is then `(m * 5^digits + 1) / 2` units.
fn tie_away_from_zero(value: f64, digits: usize) -> Option<String> {
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

    let scaled = value.abs() * 2f64.powi(digits as i32 + 1);
    if scaled.fract() != 0.0 || scaled >= EXACT_INT_LIMIT {
        return None;
    }
    let m = scaled as u128;
    if m % 2 == 0 {
        return None;
    }

    let n = (m * 5u128.pow(digits as u32) + 1) / 2;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if digits == 0 {
        return Some(format!("{sign}{n}"));
    }
    let unit = 10u128.pow(digits as u32);
    Some(format!("{sign}{}.{:0width$}", n / unit, n % unit, width = digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rounding::{HalfAwayFromZero as Away, HalfEven as Even};

    #[test]
    fn pads_fraction_with_zeros() {
        assert_eq!(to_fixed(5.0, 4, Even), "5.0000");
        assert_eq!(to_fixed(12.5, 4, Even), "12.5000");
        assert_eq!(to_fixed(-5.0, 4, Away), "-5.0000");
    }

    #[test]
    fn nearest_when_not_a_tie() {
        for mode in [Even, Away] {
            assert_eq!(to_fixed(1.23456, 4, mode), "1.2346");
            assert_eq!(to_fixed(1.23454, 4, mode), "1.2345");
            assert_eq!(to_fixed(0.00004, 4, mode), "0.0000");
            // 0.00005 is slightly above the tie in binary
            assert_eq!(to_fixed(0.00005, 4, mode), "0.0001");
        }
    }

    #[test]
    fn exact_ties_split_by_mode() {
        assert_eq!(to_fixed(0.03125, 4, Even), "0.0312");
        assert_eq!(to_fixed(0.03125, 4, Away), "0.0313");
        assert_eq!(to_fixed(0.09375, 4, Even), "0.0938");
        assert_eq!(to_fixed(0.09375, 4, Away), "0.0938");
        assert_eq!(to_fixed(-0.03125, 4, Away), "-0.0313");
        assert_eq!(to_fixed(1000.03125, 4, Away), "1000.0313");
    }

    #[test]
    fn zero_digits() {
        assert_eq!(to_fixed(2.5, 0, Away), "3");
        assert_eq!(to_fixed(-2.5, 0, Away), "-3");
        assert_eq!(to_fixed(2.5, 0, Even), "2");
    }
}
