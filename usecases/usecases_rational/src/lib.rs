//! Use Cases Layer: Rational Conversions
//!
//! Provides the conversions between rational values and the outside world.
//!
//! ## Modules
//!
//! - **[`parse`](parse/index.html)**: Decimal literal parsing (`sign? digits ('.' digits)?`)
//! - **[`float`](float/index.html)**: Exact IEEE-754 double conversion in both directions
//! - **[`format`](format/index.html)**: Canonical `n/d` text and finite decimal rendering
//!
//! ## Architecture
//!
//! This crate depends only on the Entities layer. It never touches the value
//! store; the API Facades layer composes these conversions with handle
//! allocation.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNumber and RationalValue
//! - [`api_facades`](../../api_facades/index.html): C ABI built on these conversions

pub mod float;
pub mod format;
pub mod parse;

pub use float::{from_f64, to_f64};
pub use format::{format_canonical, format_decimal};
pub use parse::parse_decimal;
