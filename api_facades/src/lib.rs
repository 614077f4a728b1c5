//! API Facades Layer
//!
//! Public surface of the exact rational engine:
//!
//! - **[`rational_facades`]**: the exported C ABI (`init`, `from_float`,
//!   `add`, `to_string`, ...). Handles are `long`, failures are sentinels.
//! - **[`last_error`]**: per-thread code of the most recent C ABI failure.
//! - **[`text_buffer`]**: caller-owned text buffers returned by `to_string`.
//! - **[`engine`]**: the same operations as `Result`-returning Rust functions
//!   over an explicit runtime.
//! - **[`owned`]**: [`OwnedRational`], a wrapper that releases its handle on
//!   drop and overloads the arithmetic operators.
//!
//! The crate builds as a `cdylib` for host languages and as an `rlib` for
//! Rust callers.

pub mod engine;
pub mod last_error;
pub mod owned;
pub mod rational_facades;
pub mod text_buffer;

pub use last_error::{clear_last_error, last_error, ErrorCode};
pub use owned::OwnedRational;
pub use rational_facades::ToFloatResult;
pub use text_buffer::RationalString;
