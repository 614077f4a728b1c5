//! Error Types
//!
//! Every fallible operation of the rational engine reports one of these
//! errors. At the C boundary they all collapse to the negative sentinel,
//! but Rust callers get the full cause.

use thiserror::Error;

/// Errors produced by the rational engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// The value store cannot grow any further
    #[error("rational value store is out of memory")]
    OutOfMemory,
    /// Negative, out-of-range, stale, or released handle
    #[error("invalid rational handle")]
    InvalidHandle,
    /// Operation attempted before `init` or after `deinit`
    #[error("rational engine is not initialized")]
    NotInitialized,
    /// Malformed decimal literal
    #[error("malformed decimal literal: {0}")]
    Parse(#[from] ParseError),
    /// Right operand of a division is zero, or a zero denominator was produced
    #[error("division by zero")]
    DivisionByZero,
    /// NaN or infinity passed where a finite float is required
    #[error("non-finite float input")]
    NonFiniteInput,
    /// Value lies outside the range of a binary64 float
    #[error("value is not representable as a finite float")]
    Unrepresentable,
}

/// Reasons a decimal literal is rejected
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
    #[error("unexpected character {found:?} at byte {position}")]
    UnexpectedCharacter { position: usize, found: char },
    #[error("second decimal point at byte {position}")]
    MultipleDecimalPoints { position: usize },
    #[error("sign at byte {position} is not at the start")]
    MisplacedSign { position: usize },
    #[error("expected a digit at byte {position}")]
    MissingDigits { position: usize },
}
