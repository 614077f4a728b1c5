//! Owned Rational Wrapper
//!
//! [`OwnedRational`] holds exactly one handle and releases it when dropped,
//! so every exit path gives the slot back. Every fallible operation returns
//! a `Result`; an error is never handed out as if it were a value.
//!
//! ```
//! use api_facades::OwnedRational;
//! use infrastructure_value_store::{RationalRuntime, StoreConfig};
//!
//! let runtime = RationalRuntime::new();
//! runtime.init_with_config(StoreConfig::default());
//!
//! let one = OwnedRational::from_f64(&runtime, 1.0).unwrap();
//! let three = OwnedRational::parse(&runtime, "3").unwrap();
//! let third = (&one / &three).unwrap();
//! assert_eq!(third.to_string(), "1/3");
//! assert!((&third * &three).unwrap().try_eq(&one).unwrap());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use entities_utilities::{RationalError, RationalValue};
use infrastructure_value_store::{Handle, RationalRuntime};

use crate::engine;

/// A rational value owned through a handle on a runtime
pub struct OwnedRational<'rt> {
    runtime: &'rt RationalRuntime,
    handle: Handle,
}

impl<'rt> OwnedRational<'rt> {
    /// Store a finite float exactly
    pub fn from_f64(runtime: &'rt RationalRuntime, value: f64) -> Result<Self, RationalError> {
        let handle = engine::from_f64(runtime, value)?;
        Ok(Self { runtime, handle })
    }

    /// Parse a decimal literal
    pub fn parse(runtime: &'rt RationalRuntime, literal: &str) -> Result<Self, RationalError> {
        let handle = engine::from_str_bytes(runtime, literal.as_bytes())?;
        Ok(Self { runtime, handle })
    }

    pub fn from_value(
        runtime: &'rt RationalRuntime,
        value: RationalValue,
    ) -> Result<Self, RationalError> {
        let handle = engine::from_value(runtime, value)?;
        Ok(Self { runtime, handle })
    }

    /// The underlying handle; it stays owned by `self`
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Copy of the stored value
    pub fn value(&self) -> Result<RationalValue, RationalError> {
        self.runtime.get(self.handle)
    }

    /// Nearest float, `None` when out of the binary64 range
    pub fn to_f64_checked(&self) -> Result<Option<f64>, RationalError> {
        engine::to_f64(self.runtime, self.handle)
    }

    /// Nearest float, with out-of-range reported as `Unrepresentable`
    pub fn try_to_f64(&self) -> Result<f64, RationalError> {
        self.to_f64_checked()?.ok_or(RationalError::Unrepresentable)
    }

    /// Canonical `n` / `n/d` text
    pub fn to_text(&self) -> Result<String, RationalError> {
        engine::to_text(self.runtime, self.handle)
    }

    /// Exact decimal text, `None` for non-terminating expansions
    pub fn to_decimal_string(&self) -> Result<Option<String>, RationalError> {
        engine::to_decimal_text(self.runtime, self.handle)
    }

    pub fn is_zero(&self) -> Result<bool, RationalError> {
        engine::is_zero(self.runtime, self.handle)
    }

    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, RationalError> {
        let (left, right) = self.operands(other)?;
        engine::compare(self.runtime, left, right)
    }

    pub fn try_eq(&self, other: &Self) -> Result<bool, RationalError> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    pub fn try_lt(&self, other: &Self) -> Result<bool, RationalError> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    pub fn try_gt(&self, other: &Self) -> Result<bool, RationalError> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    pub fn try_le(&self, other: &Self) -> Result<bool, RationalError> {
        self.try_cmp(other).map(Ordering::is_le)
    }

    pub fn try_ge(&self, other: &Self) -> Result<bool, RationalError> {
        self.try_cmp(other).map(Ordering::is_ge)
    }

    /// Handles of two operands that must live on the same runtime
    fn operands(&self, other: &Self) -> Result<(Handle, Handle), RationalError> {
        if !std::ptr::eq(self.runtime, other.runtime) {
            return Err(RationalError::InvalidHandle);
        }
        Ok((self.handle, other.handle))
    }

    fn combine(
        &self,
        other: &Self,
        op: fn(&RationalRuntime, Handle, Handle) -> Result<Handle, RationalError>,
    ) -> Result<Self, RationalError> {
        let (left, right) = self.operands(other)?;
        let handle = op(self.runtime, left, right)?;
        Ok(Self {
            runtime: self.runtime,
            handle,
        })
    }
}

impl Drop for OwnedRational<'_> {
    fn drop(&mut self) {
        if let Err(err) = engine::release(self.runtime, self.handle) {
            log::debug!("rational handle not released on drop: {err}");
        }
    }
}

impl<'a, 'rt> Add<&'a OwnedRational<'rt>> for &'a OwnedRational<'rt> {
    type Output = Result<OwnedRational<'rt>, RationalError>;

    fn add(self, rhs: &'a OwnedRational<'rt>) -> Self::Output {
        self.combine(rhs, engine::add)
    }
}

impl<'a, 'rt> Sub<&'a OwnedRational<'rt>> for &'a OwnedRational<'rt> {
    type Output = Result<OwnedRational<'rt>, RationalError>;

    fn sub(self, rhs: &'a OwnedRational<'rt>) -> Self::Output {
        self.combine(rhs, engine::sub)
    }
}

impl<'a, 'rt> Mul<&'a OwnedRational<'rt>> for &'a OwnedRational<'rt> {
    type Output = Result<OwnedRational<'rt>, RationalError>;

    fn mul(self, rhs: &'a OwnedRational<'rt>) -> Self::Output {
        self.combine(rhs, engine::mul)
    }
}

impl<'a, 'rt> Div<&'a OwnedRational<'rt>> for &'a OwnedRational<'rt> {
    type Output = Result<OwnedRational<'rt>, RationalError>;

    fn div(self, rhs: &'a OwnedRational<'rt>) -> Self::Output {
        // The engine checks again; both checks agree on what zero is
        if rhs.is_zero()? {
            return Err(RationalError::DivisionByZero);
        }
        self.combine(rhs, engine::div)
    }
}

impl fmt::Display for OwnedRational<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}

impl fmt::Debug for OwnedRational<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedRational")
            .field("handle", &self.handle)
            .finish()
    }
}
