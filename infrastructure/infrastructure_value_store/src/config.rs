//! Store Configuration
//!
//! Sizing knobs for the value store. `init()` at the C boundary reads them
//! from the environment; Rust callers can build one directly.

use std::env;

use crate::handle::MAX_SLOTS;

/// Environment variable holding the number of slots reserved up front
pub const INITIAL_SLOTS_VAR: &str = "RATIONAL_INITIAL_SLOTS";
/// Environment variable holding the slot limit (0 = unlimited)
pub const MAX_SLOTS_VAR: &str = "RATIONAL_MAX_SLOTS";

/// Value store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slots reserved when the store is created
    pub initial_capacity: usize,
    /// Maximum number of slots (0 = bounded only by the handle encoding)
    pub max_slots: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            max_slots: 0,
        }
    }
}

impl StoreConfig {
    /// Build a configuration from `RATIONAL_INITIAL_SLOTS` and `RATIONAL_MAX_SLOTS`
    ///
    /// Unset variables keep their default; malformed ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            initial_capacity: read_usize(&lookup, INITIAL_SLOTS_VAR)
                .unwrap_or(defaults.initial_capacity),
            max_slots: read_usize(&lookup, MAX_SLOTS_VAR).unwrap_or(defaults.max_slots),
        }
    }

    /// Effective slot limit after applying the handle encoding bound
    pub fn slot_limit(&self) -> usize {
        if self.max_slots == 0 {
            MAX_SLOTS
        } else {
            self.max_slots.min(MAX_SLOTS)
        }
    }
}

fn read_usize<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring {key}={raw:?}: {err}");
            None
        }
    }
}
