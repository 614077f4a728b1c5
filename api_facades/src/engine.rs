//! Handle-Level Engine
//!
//! The operations of the C ABI expressed as Rust functions over an explicit
//! [`RationalRuntime`]. Every function returns a `Result`; the C facades in
//! [`rational_facades`](crate::rational_facades) collapse the errors to
//! sentinels.
//!
//! Operand values are cloned out of the store under the lock, and the
//! arithmetic runs after the lock has been dropped.

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

use entities_utilities::{RationalError, RationalValue};
use infrastructure_value_store::{Handle, RationalRuntime};

/// Store a float exactly
pub fn from_f64(runtime: &RationalRuntime, value: f64) -> Result<Handle, RationalError> {
    let value = usecases_rational::from_f64(value)?;
    runtime.allocate(value)
}

/// Parse a decimal literal and store it
pub fn from_str_bytes(runtime: &RationalRuntime, input: &[u8]) -> Result<Handle, RationalError> {
    let value = usecases_rational::parse_decimal(input)?;
    runtime.allocate(value)
}

/// Store an already built value
pub fn from_value(
    runtime: &RationalRuntime,
    value: RationalValue,
) -> Result<Handle, RationalError> {
    runtime.allocate(value)
}

/// Nearest float, or `None` when the value overflows the binary64 range
pub fn to_f64(runtime: &RationalRuntime, handle: Handle) -> Result<Option<f64>, RationalError> {
    let value = runtime.get(handle)?;
    Ok(usecases_rational::to_f64(&value))
}

/// Canonical text form (`n` or `n/d`)
pub fn to_text(runtime: &RationalRuntime, handle: Handle) -> Result<String, RationalError> {
    let value = runtime.get(handle)?;
    Ok(usecases_rational::format_canonical(&value))
}

/// Exact decimal expansion when one exists
pub fn to_decimal_text(
    runtime: &RationalRuntime,
    handle: Handle,
) -> Result<Option<String>, RationalError> {
    let value = runtime.get(handle)?;
    Ok(usecases_rational::format_decimal(&value))
}

pub fn add(
    runtime: &RationalRuntime,
    left: Handle,
    right: Handle,
) -> Result<Handle, RationalError> {
    let (a, b) = runtime.get_pair(left, right)?;
    runtime.allocate(a.plus(&b))
}

pub fn sub(
    runtime: &RationalRuntime,
    left: Handle,
    right: Handle,
) -> Result<Handle, RationalError> {
    let (a, b) = runtime.get_pair(left, right)?;
    runtime.allocate(a.minus(&b))
}

pub fn mul(
    runtime: &RationalRuntime,
    left: Handle,
    right: Handle,
) -> Result<Handle, RationalError> {
    let (a, b) = runtime.get_pair(left, right)?;
    runtime.allocate(a.times(&b))
}

/// Divide; `DivisionByZero` when the right operand is zero
pub fn div(
    runtime: &RationalRuntime,
    left: Handle,
    right: Handle,
) -> Result<Handle, RationalError> {
    let (a, b) = runtime.get_pair(left, right)?;
    runtime.allocate(a.div(&b)?)
}

/// Three-way comparison of two stored values
pub fn compare(
    runtime: &RationalRuntime,
    left: Handle,
    right: Handle,
) -> Result<Ordering, RationalError> {
    let (a, b) = runtime.get_pair(left, right)?;
    Ok(a.comp(&b))
}

pub fn eq(runtime: &RationalRuntime, left: Handle, right: Handle) -> Result<bool, RationalError> {
    compare(runtime, left, right).map(Ordering::is_eq)
}

pub fn neq(runtime: &RationalRuntime, left: Handle, right: Handle) -> Result<bool, RationalError> {
    compare(runtime, left, right).map(Ordering::is_ne)
}

pub fn lt(runtime: &RationalRuntime, left: Handle, right: Handle) -> Result<bool, RationalError> {
    compare(runtime, left, right).map(Ordering::is_lt)
}

pub fn gt(runtime: &RationalRuntime, left: Handle, right: Handle) -> Result<bool, RationalError> {
    compare(runtime, left, right).map(Ordering::is_gt)
}

pub fn lte(runtime: &RationalRuntime, left: Handle, right: Handle) -> Result<bool, RationalError> {
    compare(runtime, left, right).map(Ordering::is_le)
}

pub fn gte(runtime: &RationalRuntime, left: Handle, right: Handle) -> Result<bool, RationalError> {
    compare(runtime, left, right).map(Ordering::is_ge)
}

pub fn is_zero(runtime: &RationalRuntime, handle: Handle) -> Result<bool, RationalError> {
    runtime.get(handle).map(|value| value.is_zero())
}

/// Release a handle; any later use of it fails with `InvalidHandle`
pub fn release(runtime: &RationalRuntime, handle: Handle) -> Result<(), RationalError> {
    runtime.release(handle)
}

/// Number of handles currently live
pub fn live_count(runtime: &RationalRuntime) -> Result<usize, RationalError> {
    runtime.live_count()
}
