//! C Text Buffers
//!
//! `to_string` hands ownership of a heap buffer to the caller. The buffer
//! holds `len` UTF-8 bytes followed by a NUL byte, and must come back
//! through `free_string` exactly once.

use std::ptr;

use libc::{c_char, c_uint};

/// Text returned across the C boundary
#[repr(C)]
#[derive(Debug)]
pub struct RationalString {
    /// Number of text bytes, excluding the trailing NUL
    pub len: c_uint,
    pub ptr: *mut c_char,
}

impl RationalString {
    /// The failure value: null pointer, zero length
    pub fn null() -> Self {
        Self {
            len: 0,
            ptr: ptr::null_mut(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Move `text` into a caller-owned buffer
    ///
    /// Returns `None` when the length does not fit in `c_uint`.
    pub fn from_text(text: String) -> Option<Self> {
        let len = c_uint::try_from(text.len()).ok()?;
        let mut bytes = text.into_bytes();
        bytes.push(0);
        let raw = Box::into_raw(bytes.into_boxed_slice());
        Some(Self {
            len,
            ptr: raw.cast::<c_char>(),
        })
    }

    /// Borrow the text bytes
    ///
    /// # Safety
    /// The buffer must have been produced by [`from_text`](Self::from_text)
    /// and not yet released.
    pub unsafe fn as_bytes(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        std::slice::from_raw_parts(self.ptr.cast::<u8>(), self.len as usize)
    }

    /// Give the buffer back to the allocator; null is a no-op
    ///
    /// # Safety
    /// The buffer must have been produced by [`from_text`](Self::from_text)
    /// with the same `len`, and must not be used afterwards.
    pub unsafe fn release(self) {
        if self.ptr.is_null() {
            return;
        }
        let slice = ptr::slice_from_raw_parts_mut(self.ptr.cast::<u8>(), self.len as usize + 1);
        drop(Box::from_raw(slice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_buffer_is_nul_terminated() {
        let buffer = RationalString::from_text("-7/2".to_string()).unwrap();
        assert_eq!(buffer.len, 4);
        unsafe {
            assert_eq!(buffer.as_bytes(), b"-7/2");
            assert_eq!(CStr::from_ptr(buffer.ptr).to_bytes(), b"-7/2");
            buffer.release();
        }
    }

    #[test]
    fn test_null_buffer() {
        let buffer = RationalString::null();
        assert!(buffer.is_null());
        assert_eq!(buffer.len, 0);
        unsafe {
            assert_eq!(buffer.as_bytes(), b"");
            buffer.release();
        }
    }
}
