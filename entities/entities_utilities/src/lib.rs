//! Entities Layer: Utilities
//!
//! Provides the numeric entities of the rational engine:
//! - Big number operations (arbitrary precision integers)
//! - Rational values in canonical lowest terms
//! - The engine-wide error type

pub mod big;
pub mod error;
pub mod rational;

pub use big::BigNumber;
pub use error::{ParseError, RationalError};
pub use rational::RationalValue;
