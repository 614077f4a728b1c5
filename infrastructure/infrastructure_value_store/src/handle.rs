//! Handle Encoding
//!
//! A handle packs a slot index (low bits) and the slot's generation (high
//! bits) into a non-negative integer that fits the C `long` the ABI passes
//! handles in. Field widths follow `c_long::BITS - 1`:
//! - 64-bit `long`: 32-bit index, 31-bit generation
//! - 32-bit `long`: 24-bit index, 7-bit generation
//!
//! The sign bit is never set, which leaves `-1` free as the sentinel.

use libc::c_long;

/// Raw handle value returned when no value was produced
pub const SENTINEL: i64 = -1;

/// Value bits of a non-negative `c_long`
pub const HANDLE_BITS: u32 = c_long::BITS - 1;

/// Width of the index field
pub const INDEX_BITS: u32 = if HANDLE_BITS > 32 { 32 } else { 24 };

/// Width of the generation field
pub const GENERATION_BITS: u32 = HANDLE_BITS - INDEX_BITS;

/// Generations wrap inside [`GENERATION_BITS`]
pub const GENERATION_MASK: u32 = ((1u64 << GENERATION_BITS) - 1) as u32;

const INDEX_MASK: i64 = (1 << INDEX_BITS) - 1;

/// Number of slots addressable by the index field
pub const MAX_SLOTS: usize = {
    let slots = (1u64 << INDEX_BITS) - 1;
    if slots > usize::MAX as u64 {
        usize::MAX
    } else {
        slots as usize
    }
};

/// Opaque reference to a stored rational value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation: generation & GENERATION_MASK,
        }
    }

    /// Decode a raw handle; `None` for negative or oversized values
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw < 0 || raw >> HANDLE_BITS != 0 {
            return None;
        }
        Some(Self {
            index: (raw & INDEX_MASK) as u32,
            generation: (raw >> INDEX_BITS) as u32 & GENERATION_MASK,
        })
    }

    /// Encode for the C boundary; always in `0..=c_long::MAX`
    pub fn to_raw(self) -> i64 {
        (i64::from(self.generation) << INDEX_BITS) | i64::from(self.index)
    }

    /// Slot index
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Generation stamp of the allocation this handle refers to
    pub fn generation(self) -> u32 {
        self.generation
    }
}
