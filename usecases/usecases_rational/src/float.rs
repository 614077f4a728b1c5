//! IEEE-754 Double Conversion
//!
//! `from_f64` is exact: a finite double is `mantissa * 2^exponent`, so it is
//! turned into a fraction whose denominator is a power of two. `to_f64`
//! rounds the exact quotient to the nearest double, ties to even, and
//! reports values beyond the largest finite double as unrepresentable.

use std::cmp::Ordering;

use entities_utilities::{BigNumber, RationalError, RationalValue};

const FRACTION_BITS: u64 = 52;
const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;
const HIDDEN_BIT: u64 = 1 << FRACTION_BITS;
const EXPONENT_BIAS: i64 = 1023;
const MAX_BIASED_EXPONENT: i64 = 0x7ff;
/// Exponent of the least significant bit of a subnormal double
const MIN_SCALE: i64 = -1074;
const MIN_NORMAL_EXPONENT: i64 = -1022;
const MAX_EXPONENT: i64 = 1023;

/// Convert a finite double into the exactly equal rational value
///
/// # Returns
/// * `Ok(RationalValue)` - Exact value; `-0.0` maps to zero
/// * `Err(RationalError::NonFiniteInput)` - For NaN and infinities
///
/// # Examples
/// ```
/// use usecases_rational::from_f64;
///
/// assert_eq!(from_f64(0.75).unwrap().to_string(), "3/4");
/// assert_eq!(
///     from_f64(0.1).unwrap().to_string(),
///     "3602879701896397/36028797018963968"
/// );
/// assert!(from_f64(f64::NAN).is_err());
/// ```
pub fn from_f64(value: f64) -> Result<RationalValue, RationalError> {
    if !value.is_finite() {
        return Err(RationalError::NonFiniteInput);
    }

    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> FRACTION_BITS) as i64) & MAX_BIASED_EXPONENT;
    let fraction = bits & FRACTION_MASK;

    let (mantissa, exponent) = if biased == 0 {
        (fraction, MIN_SCALE)
    } else {
        (fraction | HIDDEN_BIT, biased - EXPONENT_BIAS - FRACTION_BITS as i64)
    };
    if mantissa == 0 {
        return Ok(RationalValue::zero());
    }

    let magnitude = BigNumber::from_u64(mantissa);
    let numerator = if negative { magnitude.neg() } else { magnitude };

    if exponent >= 0 {
        RationalValue::new(numerator.shl(exponent as u64), BigNumber::one())
    } else {
        RationalValue::new(numerator, BigNumber::one().shl(exponent.unsigned_abs()))
    }
}

/// Convert a rational value to the nearest double, ties to even
///
/// # Returns
/// * `Some(f64)` - The correctly rounded double. Magnitudes below the
///   smallest subnormal round to a signed zero.
/// * `None` - The magnitude rounds beyond `f64::MAX`
///
/// # Examples
/// ```
/// use entities_utilities::RationalValue;
/// use usecases_rational::to_f64;
///
/// let third = RationalValue::from_fraction(1, 3).unwrap();
/// assert_eq!(to_f64(&third), Some(1.0 / 3.0));
/// ```
pub fn to_f64(value: &RationalValue) -> Option<f64> {
    if value.is_zero() {
        return Some(0.0);
    }

    let numerator = value.numerator().abs();
    let denominator = value.denominator();

    // floor(log2(numerator / denominator))
    let mut exponent = numerator.significant_bits() as i64 - denominator.significant_bits() as i64;
    if compare_scaled(&numerator, denominator, exponent) == Ordering::Less {
        exponent -= 1;
    }
    if exponent > MAX_EXPONENT {
        return None;
    }

    let mut scale = if exponent < MIN_NORMAL_EXPONENT {
        MIN_SCALE
    } else {
        exponent - FRACTION_BITS as i64
    };

    let (scaled_numerator, scaled_denominator) = if scale <= 0 {
        (numerator.shl(scale.unsigned_abs()), denominator.clone())
    } else {
        (numerator, denominator.shl(scale as u64))
    };
    let (quotient, remainder) = scaled_numerator.div_rem(&scaled_denominator)?;
    let mut mantissa = quotient.to_u64()?;

    match remainder.shl(1).comp(&scaled_denominator) {
        Ordering::Greater => mantissa += 1,
        Ordering::Equal if mantissa & 1 == 1 => mantissa += 1,
        _ => {}
    }
    if mantissa == HIDDEN_BIT << 1 {
        mantissa = HIDDEN_BIT;
        scale += 1;
    }

    let magnitude_bits = if mantissa < HIDDEN_BIT {
        // subnormal, scale is MIN_SCALE
        mantissa
    } else {
        let biased = scale + FRACTION_BITS as i64 + EXPONENT_BIAS;
        if biased >= MAX_BIASED_EXPONENT {
            return None;
        }
        ((biased as u64) << FRACTION_BITS) | (mantissa & FRACTION_MASK)
    };

    let sign_bit = if value.is_negative() { 1u64 << 63 } else { 0 };
    Some(f64::from_bits(sign_bit | magnitude_bits))
}

/// Compare `numerator` against `denominator * 2^exponent`
fn compare_scaled(numerator: &BigNumber, denominator: &BigNumber, exponent: i64) -> Ordering {
    if exponent >= 0 {
        numerator.comp(&denominator.shl(exponent as u64))
    } else {
        numerator.shl(exponent.unsigned_abs()).comp(denominator)
    }
}
