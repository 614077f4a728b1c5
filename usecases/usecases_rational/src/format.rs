//! Rational Formatting
//!
//! Two renderings are provided:
//! - [`format_canonical`]: the total canonical form used by the C ABI,
//!   `numerator` for integers and `numerator/denominator` otherwise.
//! - [`format_decimal`]: the exact finite decimal expansion, available only
//!   when the denominator divides a power of ten. Its output is accepted by
//!   [`parse_decimal`](crate::parse::parse_decimal).

use entities_utilities::{BigNumber, RationalValue};

/// Render the canonical text form
///
/// The numerator carries the sign; the denominator is omitted when it is 1.
/// Digit counts are unbounded.
///
/// # Examples
/// ```
/// use entities_utilities::RationalValue;
/// use usecases_rational::format_canonical;
///
/// assert_eq!(format_canonical(&RationalValue::from_fraction(-6, 4).unwrap()), "-3/2");
/// assert_eq!(format_canonical(&RationalValue::from_i64(7)), "7");
/// ```
pub fn format_canonical(value: &RationalValue) -> String {
    value.to_string()
}

/// Render the exact decimal expansion, if it is finite
///
/// # Returns
/// * `Some(text)` - `-?digits(.digits)?` with no trailing fractional zeros
/// * `None` - The reduced denominator has a prime factor other than 2 or 5
///
/// # Examples
/// ```
/// use entities_utilities::RationalValue;
/// use usecases_rational::format_decimal;
///
/// assert_eq!(format_decimal(&RationalValue::from_fraction(-1, 8).unwrap()).as_deref(), Some("-0.125"));
/// assert_eq!(format_decimal(&RationalValue::from_fraction(1, 3).unwrap()), None);
/// ```
pub fn format_decimal(value: &RationalValue) -> Option<String> {
    if value.is_integer() {
        return Some(value.numerator().to_string());
    }

    let denominator = value.denominator();
    let (rest, twos) = strip_factor(denominator, 2);
    let (rest, fives) = strip_factor(&rest, 5);
    if rest != BigNumber::one() {
        return None;
    }

    // value * 10^k is an integer for k = max(twos, fives), and for no smaller k
    let places = twos.max(fives);
    let scaled = value
        .numerator()
        .abs()
        .times(&BigNumber::pow10(places))
        .div(denominator)?;

    let digits = scaled.to_string();
    let places = places as usize;
    let padded = if digits.len() <= places {
        format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (integer, fraction) = padded.split_at(padded.len() - places);
    let sign = if value.is_negative() { "-" } else { "" };
    Some(format!("{sign}{integer}.{fraction}"))
}

/// Divide out every factor `p` of `n`, returning the cofactor and the count
fn strip_factor(n: &BigNumber, p: i64) -> (BigNumber, u64) {
    let divisor = BigNumber::from_i64(p);
    let mut rest = n.clone();
    let mut count = 0;
    while let Some((quotient, remainder)) = rest.div_rem(&divisor) {
        if !remainder.is_zero() || rest.is_zero() {
            break;
        }
        rest = quotient;
        count += 1;
    }
    (rest, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> RationalValue {
        RationalValue::from_fraction(n, d).unwrap()
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(format_canonical(&RationalValue::zero()), "0");
        assert_eq!(format_canonical(&frac(-42, 1)), "-42");
        assert_eq!(format_canonical(&frac(1, 3)), "1/3");
        assert_eq!(format_canonical(&frac(-1, 3)), "-1/3");
    }

    #[test]
    fn test_canonical_unbounded() {
        let huge = RationalValue::new(
            BigNumber::pow10(500).plus(&BigNumber::one()),
            BigNumber::pow10(499),
        )
        .unwrap();
        let text = format_canonical(&huge);
        assert_eq!(text.len(), 501 + 1 + 500);
        assert!(text.starts_with('1'));
        assert!(text.ends_with(&format!("/1{}", "0".repeat(499))));
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(format_decimal(&frac(1, 2)).as_deref(), Some("0.5"));
        assert_eq!(format_decimal(&frac(1, 20)).as_deref(), Some("0.05"));
        assert_eq!(format_decimal(&frac(-3, 2)).as_deref(), Some("-1.5"));
        assert_eq!(format_decimal(&frac(1, 1024)).as_deref(), Some("0.0009765625"));
        assert_eq!(format_decimal(&frac(7, 1)).as_deref(), Some("7"));
        assert_eq!(format_decimal(&RationalValue::zero()).as_deref(), Some("0"));
    }

    #[test]
    fn test_decimal_not_finite() {
        assert_eq!(format_decimal(&frac(1, 3)), None);
        assert_eq!(format_decimal(&frac(1, 6)), None);
        assert_eq!(format_decimal(&frac(5, 14)), None);
    }

    #[test]
    fn test_strip_factor() {
        let (rest, count) = strip_factor(&BigNumber::from_i64(40), 2);
        assert_eq!(rest.to_i64(), Some(5));
        assert_eq!(count, 3);
        let (rest, count) = strip_factor(&BigNumber::from_i64(7), 5);
        assert_eq!(rest.to_i64(), Some(7));
        assert_eq!(count, 0);
    }
}
