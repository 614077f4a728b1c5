//! Rational C ABI Facades
//!
//! Exported functions of the rational engine. These maintain exact C function
//! signatures and call the handle-level [`engine`](crate::engine) on the
//! process-wide runtime.
//!
//! Failures never cross the boundary as panics:
//! - handle-returning functions yield [`SENTINEL`] (`-1`)
//! - predicates yield `-1`, otherwise `0` for false and `1` for true
//! - `to_float` yields `valid = false`, `to_string` a null buffer
//!
//! The cause is available afterwards through [`last_error`](crate::last_error::last_error).
//!
//! Handles travel as `c_long`; their field widths are sized so every handle
//! the store produces fits.

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

use entities_utilities::{ParseError, RationalError};
use infrastructure_value_store::{global_runtime, Handle, RationalRuntime, SENTINEL};
use libc::{c_char, c_int, c_long, c_uint};

use crate::engine;
use crate::last_error::{self, ErrorCode};
use crate::text_buffer::RationalString;

/// Result of `to_float`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToFloatResult {
    pub valid: bool,
    /// Nearest double; 0.0 whenever `valid` is false
    pub value: f64,
}

impl ToFloatResult {
    fn invalid() -> Self {
        Self {
            valid: false,
            value: 0.0,
        }
    }
}

fn fail(err: &RationalError) {
    match err {
        RationalError::InvalidHandle => log::warn!("invalid or stale rational handle"),
        _ => log::debug!("rational operation failed: {err}"),
    }
    last_error::record(ErrorCode::from(err));
}

fn decode(raw: c_long) -> Result<Handle, RationalError> {
    Handle::from_raw(i64::from(raw)).ok_or(RationalError::InvalidHandle)
}

fn encode(result: Result<Handle, RationalError>) -> c_long {
    let handle = match result {
        Ok(handle) => handle,
        Err(err) => {
            fail(&err);
            return SENTINEL as c_long;
        }
    };
    match c_long::try_from(handle.to_raw()) {
        Ok(raw) => raw,
        Err(_) => {
            // The value never reached the caller
            if let Err(err) = engine::release(global_runtime(), handle) {
                log::debug!("unencodable rational handle not released: {err}");
            }
            fail(&RationalError::OutOfMemory);
            SENTINEL as c_long
        }
    }
}

fn tri_state(result: Result<bool, RationalError>) -> c_int {
    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(err) => {
            fail(&err);
            -1
        }
    }
}

fn binary(
    op: fn(&RationalRuntime, Handle, Handle) -> Result<Handle, RationalError>,
    left: c_long,
    right: c_long,
) -> c_long {
    encode(decode(left).and_then(|l| decode(right).and_then(|r| op(global_runtime(), l, r))))
}

fn predicate(
    op: fn(&RationalRuntime, Handle, Handle) -> Result<bool, RationalError>,
    left: c_long,
    right: c_long,
) -> c_int {
    tri_state(decode(left).and_then(|l| decode(right).and_then(|r| op(global_runtime(), l, r))))
}

/// Create the value store; a repeated call is a no-op
///
/// Sizing is read from `RATIONAL_INITIAL_SLOTS` and `RATIONAL_MAX_SLOTS`.
#[no_mangle]
pub extern "C" fn init() {
    global_runtime().init();
}

/// Destroy the value store and every outstanding handle
#[no_mangle]
pub extern "C" fn deinit() {
    global_runtime().deinit();
}

/// Store a finite double exactly
#[no_mangle]
pub extern "C" fn from_float(value: f64) -> c_long {
    encode(engine::from_f64(global_runtime(), value))
}

/// Parse `len` bytes of decimal text (`-?digits(.digits)?`)
///
/// # Safety
/// `ptr` must point to `len` readable bytes. It may be null only when `len`
/// is 0.
#[no_mangle]
pub unsafe extern "C" fn from_string(ptr: *const c_char, len: c_uint) -> c_long {
    if ptr.is_null() {
        if len != 0 {
            log::warn!("from_string called with a null pointer and length {len}");
        }
        return encode(Err(ParseError::Empty.into()));
    }
    let input = std::slice::from_raw_parts(ptr.cast::<u8>(), len as usize);
    encode(engine::from_str_bytes(global_runtime(), input))
}

/// Nearest double, rounding ties to even
///
/// `valid` is false for an invalid handle or a value beyond the double range.
#[no_mangle]
pub extern "C" fn to_float(handle: c_long) -> ToFloatResult {
    match decode(handle).and_then(|h| engine::to_f64(global_runtime(), h)) {
        Ok(Some(value)) => ToFloatResult { valid: true, value },
        Ok(None) => ToFloatResult::invalid(),
        Err(err) => {
            fail(&err);
            ToFloatResult::invalid()
        }
    }
}

/// Canonical text of a value (`n` or `n/d`)
///
/// The caller owns the returned buffer and must pass it to [`free_string`].
/// A null `ptr` signals failure.
#[no_mangle]
pub extern "C" fn to_string(handle: c_long) -> RationalString {
    let text = match decode(handle).and_then(|h| engine::to_text(global_runtime(), h)) {
        Ok(text) => text,
        Err(err) => {
            fail(&err);
            return RationalString::null();
        }
    };
    RationalString::from_text(text).unwrap_or_else(|| {
        log::debug!("rational text does not fit in an unsigned int length");
        last_error::record(ErrorCode::TextTooLong);
        RationalString::null()
    })
}

/// Release a buffer returned by [`to_string`]
///
/// # Safety
/// `string` must be exactly what `to_string` returned and must not have been
/// freed before. A null `ptr` is ignored.
#[no_mangle]
pub unsafe extern "C" fn free_string(string: RationalString) {
    if string.is_null() {
        log::warn!("free_string called with a null pointer");
        return;
    }
    string.release();
}

#[no_mangle]
pub extern "C" fn add(left: c_long, right: c_long) -> c_long {
    binary(engine::add, left, right)
}

#[no_mangle]
pub extern "C" fn sub(left: c_long, right: c_long) -> c_long {
    binary(engine::sub, left, right)
}

#[no_mangle]
pub extern "C" fn mul(left: c_long, right: c_long) -> c_long {
    binary(engine::mul, left, right)
}

/// Divide; the sentinel is returned when `right` is zero
#[no_mangle]
pub extern "C" fn div(left: c_long, right: c_long) -> c_long {
    binary(engine::div, left, right)
}

#[no_mangle]
pub extern "C" fn eq(left: c_long, right: c_long) -> c_int {
    predicate(engine::eq, left, right)
}

#[no_mangle]
pub extern "C" fn neq(left: c_long, right: c_long) -> c_int {
    predicate(engine::neq, left, right)
}

#[no_mangle]
pub extern "C" fn lt(left: c_long, right: c_long) -> c_int {
    predicate(engine::lt, left, right)
}

#[no_mangle]
pub extern "C" fn gt(left: c_long, right: c_long) -> c_int {
    predicate(engine::gt, left, right)
}

#[no_mangle]
pub extern "C" fn lte(left: c_long, right: c_long) -> c_int {
    predicate(engine::lte, left, right)
}

#[no_mangle]
pub extern "C" fn gte(left: c_long, right: c_long) -> c_int {
    predicate(engine::gte, left, right)
}

#[no_mangle]
pub extern "C" fn is_zero(handle: c_long) -> c_int {
    tri_state(decode(handle).and_then(|h| engine::is_zero(global_runtime(), h)))
}

/// Release a handle; invalid handles are ignored
#[no_mangle]
pub extern "C" fn delete(handle: c_long) {
    if let Err(err) = decode(handle).and_then(|h| engine::release(global_runtime(), h)) {
        fail(&err);
    }
}
