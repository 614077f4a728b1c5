//! Last-Error Side Channel
//!
//! The C return values collapse every failure into one sentinel. The code of
//! the most recent failure on the calling thread is kept here so C callers
//! can ask why. Successful calls leave it untouched.

use std::cell::Cell;

use entities_utilities::RationalError;
use libc::c_int;

/// Numeric failure codes exposed through [`last_error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    None = 0,
    OutOfMemory = 1,
    InvalidHandle = 2,
    NotInitialized = 3,
    Parse = 4,
    DivisionByZero = 5,
    NonFiniteInput = 6,
    TextTooLong = 7,
    Unrepresentable = 8,
}

impl From<&RationalError> for ErrorCode {
    fn from(err: &RationalError) -> Self {
        match err {
            RationalError::OutOfMemory => ErrorCode::OutOfMemory,
            RationalError::InvalidHandle => ErrorCode::InvalidHandle,
            RationalError::NotInitialized => ErrorCode::NotInitialized,
            RationalError::Parse(_) => ErrorCode::Parse,
            RationalError::DivisionByZero => ErrorCode::DivisionByZero,
            RationalError::NonFiniteInput => ErrorCode::NonFiniteInput,
            RationalError::Unrepresentable => ErrorCode::Unrepresentable,
        }
    }
}

thread_local! {
    static LAST_ERROR: Cell<ErrorCode> = const { Cell::new(ErrorCode::None) };
}

/// Remember a failure for the calling thread
pub fn record(code: ErrorCode) {
    LAST_ERROR.with(|last| last.set(code));
}

/// Code of the calling thread's most recent failure
pub fn current() -> ErrorCode {
    LAST_ERROR.with(Cell::get)
}

/// Return the code of the most recent failure on this thread (0 = none)
#[no_mangle]
pub extern "C" fn last_error() -> c_int {
    current() as c_int
}

/// Reset this thread's failure code to 0
#[no_mangle]
pub extern "C" fn clear_last_error() {
    record(ErrorCode::None);
}
