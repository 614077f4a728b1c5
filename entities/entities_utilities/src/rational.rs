//! Rational Number Operations Module
//!
//! This module provides the exact rational value stored behind every handle
//! of the rational engine, together with the operations that only need the
//! value itself.
//!
//! # Purpose
//!
//! - **Normalization**: every constructor funnels through [`RationalValue::new`],
//!   which reduces a numerator/denominator pair to lowest terms with a strictly
//!   positive denominator. Zero is always `0/1`.
//!
//! - **Arithmetic Operations**: addition, subtraction, multiplication and
//!   division computed on the raw cross products and normalized afterwards.
//!
//! - **Comparison Operations**: a total order obtained by cross multiplication.
//!   Because normalized denominators are positive, no sign correction is
//!   needed.
//!
//! # Implementation Details
//!
//! Numerator and denominator are [`BigNumber`]s, so results never overflow.
//! The invariant `gcd(|numerator|, denominator) == 1 && denominator > 0`
//! holds for every `RationalValue` that can be observed outside this module.
//!
//! # Examples
//!
//! ```rust
//! use entities_utilities::{BigNumber, RationalValue};
//!
//! let third = RationalValue::new(BigNumber::from_i64(1), BigNumber::from_i64(3)).unwrap();
//! let sum = third.plus(&third).plus(&third); // Exactly 1, no rounding error
//! assert_eq!(sum, RationalValue::from_i64(1));
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::fmt;

use crate::big::BigNumber;
use crate::error::RationalError;

/// Exact rational value in canonical form.
///
/// The fields are private so the lowest-terms invariant cannot be broken
/// from outside; use [`RationalValue::new`] to build one from an arbitrary
/// pair.
///
/// # Examples
///
/// ```rust
/// use entities_utilities::{BigNumber, RationalValue};
///
/// let r = RationalValue::new(BigNumber::from_i64(6), BigNumber::from_i64(-4)).unwrap();
/// assert_eq!(r.to_string(), "-3/2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalValue {
    numerator: BigNumber,
    denominator: BigNumber,
}

impl RationalValue {
    /// Normalize a numerator/denominator pair.
    ///
    /// The denominator may be negative or share factors with the numerator;
    /// both are divided by `gcd(|n|, |d|)` and the signs are moved onto the
    /// numerator.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `denominator` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_utilities::{BigNumber, RationalValue};
    ///
    /// let zero = RationalValue::new(BigNumber::zero(), BigNumber::from_i64(-7)).unwrap();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.denominator(), &BigNumber::one());
    /// ```
    pub fn new(numerator: BigNumber, denominator: BigNumber) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }

        let g = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = match (numerator.div(&g), denominator.div(&g)) {
            (Some(n), Some(d)) => (n, d),
            // g >= 1 whenever the denominator is non-zero
            _ => return Err(RationalError::DivisionByZero),
        };

        if denominator.is_negative() {
            numerator = numerator.neg();
            denominator = denominator.neg();
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The value 0, represented as `0/1`
    pub fn zero() -> Self {
        Self {
            numerator: BigNumber::zero(),
            denominator: BigNumber::one(),
        }
    }

    /// Create a new rational number from a 64-bit signed integer.
    pub fn from_i64(value: i64) -> Self {
        Self {
            numerator: BigNumber::from_i64(value),
            denominator: BigNumber::one(),
        }
    }

    /// Create a rational number from two small integers.
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `denominator` is zero.
    pub fn from_fraction(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(BigNumber::from_i64(numerator), BigNumber::from_i64(denominator))
    }

    /// Signed numerator in lowest terms
    pub fn numerator(&self) -> &BigNumber {
        &self.numerator
    }

    /// Denominator in lowest terms; always strictly positive
    pub fn denominator(&self) -> &BigNumber {
        &self.denominator
    }

    /// Check if the rational number is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if the rational number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Check if the rational number represents an integer.
    pub fn is_integer(&self) -> bool {
        self.denominator == BigNumber::one()
    }

    /// Add two rational numbers: a/b + c/d = (a·d + c·b)/(b·d)
    pub fn plus(&self, other: &Self) -> Self {
        let numerator = self
            .numerator
            .times(&other.denominator)
            .plus(&other.numerator.times(&self.denominator));
        let denominator = self.denominator.times(&other.denominator);
        Self::from_nonzero_denominator(numerator, denominator)
    }

    /// Subtract two rational numbers: a/b − c/d = (a·d − c·b)/(b·d)
    pub fn minus(&self, other: &Self) -> Self {
        let numerator = self
            .numerator
            .times(&other.denominator)
            .minus(&other.numerator.times(&self.denominator));
        let denominator = self.denominator.times(&other.denominator);
        Self::from_nonzero_denominator(numerator, denominator)
    }

    /// Multiply two rational numbers: a/b × c/d = (a·c)/(b·d)
    pub fn times(&self, other: &Self) -> Self {
        let numerator = self.numerator.times(&other.numerator);
        let denominator = self.denominator.times(&other.denominator);
        Self::from_nonzero_denominator(numerator, denominator)
    }

    /// Divide two rational numbers: a/b ÷ c/d = (a·d)/(b·c)
    ///
    /// # Errors
    ///
    /// `RationalError::DivisionByZero` if `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let numerator = self.numerator.times(&other.denominator);
        let denominator = self.denominator.times(&other.numerator);
        Self::new(numerator, denominator)
    }

    /// Negate a rational number.
    pub fn neg(&self) -> Self {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }

    /// Compare two rational numbers by cross multiplication.
    pub fn comp(&self, other: &Self) -> Ordering {
        let left = self.numerator.times(&other.denominator);
        let right = other.numerator.times(&self.denominator);
        left.comp(&right)
    }

    // Products of positive denominators are never zero.
    fn from_nonzero_denominator(numerator: BigNumber, denominator: BigNumber) -> Self {
        match Self::new(numerator, denominator) {
            Ok(value) => value,
            Err(err) => panic!("normalized denominators multiplied to zero: {err}"),
        }
    }
}

impl PartialOrd for RationalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RationalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comp(other)
    }
}

/// Canonical text form: `numerator` when the denominator is 1, otherwise
/// `numerator/denominator`, both in base 10 with the sign on the numerator.
impl fmt::Display for RationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
