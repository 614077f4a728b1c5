//! Big Number Operations
//!
//! Provides the arbitrary precision integer substrate of the rational engine.
//!
//! This module uses the `malachite` crate for the limb arithmetic. Values
//! never overflow; their magnitude is bounded only by available memory.
//! Division truncates towards zero and the remainder takes the sign of the
//! dividend, matching Rust's primitive integer semantics.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use malachite::base::num::arithmetic::traits::{Abs, Pow};
use malachite::base::num::logic::traits::SignificantBits;
use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value 0
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0),
        }
    }

    /// The value 1
    pub fn one() -> Self {
        Self {
            value: Integer::from(1),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Build a non-negative big number from a run of ASCII decimal digits
    ///
    /// Returns `None` if `digits` is empty or contains anything other than
    /// `0`-`9`. Signs are the caller's business.
    pub fn parse_decimal_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Integer::from_str(digits).ok().map(|value| Self { value })
    }

    /// 10^exponent
    pub fn pow10(exponent: u64) -> Self {
        Self {
            value: Integer::from(10).pow(exponent),
        }
    }

    /// Convert to i64, if the value fits
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64, if the value is non-negative and fits
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// -1, 0 or 1 according to the sign
    pub fn signum(&self) -> i32 {
        match self.value.cmp(&Integer::from(0)) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Number of bits in the magnitude; 0 for zero
    pub fn significant_bits(&self) -> u64 {
        (&self.value).significant_bits()
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two big numbers, truncating towards zero
    ///
    /// Returns None if dividing by zero
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Remainder of truncating division: x % y
    ///
    /// Returns None if dividing by zero
    pub fn rem(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value % &other.value,
        })
    }

    /// Quotient and remainder of truncating division
    ///
    /// Satisfies `q * y + r == x` with `|r| < |y|`. Returns None if
    /// dividing by zero.
    pub fn div_rem(&self, other: &Self) -> Option<(Self, Self)> {
        if other.is_zero() {
            return None;
        }
        let quotient = &self.value / &other.value;
        let remainder = &self.value - &quotient * &other.value;
        Some((Self { value: quotient }, Self { value: remainder }))
    }

    /// Negation: -x
    pub fn neg(&self) -> Self {
        Self {
            value: -&self.value,
        }
    }

    /// Absolute value: |x|
    pub fn abs(&self) -> Self {
        Self {
            value: (&self.value).abs(),
        }
    }

    /// Left shift by `bits`: x * 2^bits
    pub fn shl(&self, bits: u64) -> Self {
        Self {
            value: &self.value << bits,
        }
    }

    /// Greatest common divisor of |x| and |y| (Euclidean algorithm)
    ///
    /// `gcd(0, 0)` is 0; otherwise the result is strictly positive.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = Self {
                value: &a.value % &b.value,
            };
            a = b;
            b = r;
        }
        a
    }

    /// Compare two big numbers (signed comparison)
    pub fn comp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_number_creation() {
        let big = BigNumber::from_i64(12345);
        assert_eq!(big.signum(), 1);
        assert!(!big.is_zero());

        let big_neg = BigNumber::from_i64(-12345);
        assert!(big_neg.is_negative());
        assert_eq!(BigNumber::zero().signum(), 0);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(50);

        assert_eq!(a.plus(&b).to_i64(), Some(150));
        assert_eq!(a.minus(&b).to_i64(), Some(50));
        assert_eq!(a.times(&b).to_i64(), Some(5000));
        assert_eq!(a.div(&b).unwrap().to_i64(), Some(2));
        assert_eq!(a.rem(&b).unwrap().to_i64(), Some(0));
    }

    #[test]
    fn test_truncating_division() {
        let a = BigNumber::from_i64(-7);
        let b = BigNumber::from_i64(2);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_i64(), Some(-3));
        assert_eq!(r.to_i64(), Some(-1));
        assert!(a.div_rem(&BigNumber::zero()).is_none());
        assert!(a.div(&BigNumber::zero()).is_none());
    }

    #[test]
    fn test_comparison() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(-50);

        assert_eq!(a.comp(&b), Ordering::Greater);
        assert_eq!(b.comp(&a), Ordering::Less);
        assert_eq!(a.comp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_gcd() {
        let a = BigNumber::from_i64(-84);
        let b = BigNumber::from_i64(36);
        assert_eq!(a.gcd(&b).to_i64(), Some(12));
        assert_eq!(BigNumber::zero().gcd(&b).to_i64(), Some(36));
        assert!(BigNumber::zero().gcd(&BigNumber::zero()).is_zero());
    }

    #[test]
    fn test_parse_decimal_digits() {
        let big = BigNumber::parse_decimal_digits("000123456789012345678901234567890").unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert!(BigNumber::parse_decimal_digits("").is_none());
        assert!(BigNumber::parse_decimal_digits("-1").is_none());
        assert!(BigNumber::parse_decimal_digits("1.5").is_none());
    }

    #[test]
    fn test_pow10_and_shift() {
        assert_eq!(BigNumber::pow10(0).to_i64(), Some(1));
        assert_eq!(BigNumber::pow10(18).to_i64(), Some(1_000_000_000_000_000_000));
        assert_eq!(BigNumber::one().shl(10).to_i64(), Some(1024));
        assert_eq!(BigNumber::one().shl(100).significant_bits(), 101);
        assert_eq!(BigNumber::zero().significant_bits(), 0);
    }

    #[test]
    fn test_large_numbers() {
        let a = BigNumber::from_u64(u64::MAX);
        let sum = a.plus(&BigNumber::one());

        assert!(sum.to_u64().is_none());
        assert!(sum.to_i64().is_none());
        assert_eq!(sum.to_string(), "18446744073709551616");
        assert_eq!(sum.minus(&BigNumber::one()).to_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_neg_abs() {
        let a = BigNumber::from_i64(-42);
        assert_eq!(a.abs().to_i64(), Some(42));
        assert_eq!(a.neg().to_i64(), Some(42));
        assert_eq!(a.abs().neg().to_i64(), Some(-42));
    }
}
