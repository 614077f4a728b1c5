//! Engine Runtime
//!
//! Owns the value store behind a single lock and implements the engine
//! lifecycle: `init` creates the store, `deinit` destroys it together with
//! every outstanding handle. Each table operation holds the lock only for
//! its own duration; callers clone operand values out and compute unlocked.
//!
//! The C boundary uses the process-wide instance returned by
//! [`global_runtime`]. Rust callers may create private runtimes and pass them
//! explicitly.

use std::sync::{Mutex, MutexGuard, PoisonError};

use entities_utilities::{RationalError, RationalValue};

use crate::config::StoreConfig;
use crate::handle::Handle;
use crate::store::ValueStore;

struct RuntimeState {
    store: Option<ValueStore>,
    /// Epoch carried over from the last torn-down store
    epoch: u32,
}

/// Value store plus its init/deinit lifecycle
pub struct RationalRuntime {
    state: Mutex<RuntimeState>,
}

lazy_static::lazy_static! {
    static ref GLOBAL_RUNTIME: RationalRuntime = RationalRuntime::new();
}

/// The process-wide runtime used by the C ABI
pub fn global_runtime() -> &'static RationalRuntime {
    &GLOBAL_RUNTIME
}

impl RationalRuntime {
    /// Create an uninitialized runtime; call [`init`](Self::init) before use
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RuntimeState {
                store: None,
                epoch: 0,
            }),
        }
    }

    /// Create the value store using configuration from the environment
    ///
    /// Returns `false` (and changes nothing) if already initialized.
    pub fn init(&self) -> bool {
        self.init_with_config(StoreConfig::from_env())
    }

    /// Create the value store with an explicit configuration
    ///
    /// Returns `false` (and changes nothing) if already initialized.
    pub fn init_with_config(&self, config: StoreConfig) -> bool {
        let mut state = self.lock();
        if state.store.is_some() {
            log::debug!("rational engine already initialized, ignoring init");
            return false;
        }
        state.store = Some(ValueStore::with_config(config, state.epoch));
        log::info!(
            "rational engine initialized (initial slots {}, slot limit {})",
            config.initial_capacity,
            config.slot_limit()
        );
        true
    }

    /// Destroy the value store, invalidating every outstanding handle
    ///
    /// Returns the number of values that were still live. Calling it on an
    /// uninitialized runtime does nothing and returns 0.
    pub fn deinit(&self) -> usize {
        let mut state = self.lock();
        match state.store.take() {
            Some(mut store) => {
                state.epoch = store.next_epoch();
                let dropped = store.clear_all();
                log::info!("rational engine deinitialized, {dropped} live values dropped");
                dropped
            }
            None => {
                log::debug!("rational engine not initialized, ignoring deinit");
                0
            }
        }
    }

    /// Check whether a store currently exists
    pub fn is_initialized(&self) -> bool {
        self.lock().store.is_some()
    }

    /// Store a value and return its handle
    pub fn allocate(&self, value: RationalValue) -> Result<Handle, RationalError> {
        self.with_store_mut(|store| store.allocate(value))
    }

    /// Clone out the value behind a handle
    pub fn get(&self, handle: Handle) -> Result<RationalValue, RationalError> {
        self.with_store(|store| store.get(handle).cloned())
    }

    /// Clone out two operands under one lock acquisition
    pub fn get_pair(
        &self,
        left: Handle,
        right: Handle,
    ) -> Result<(RationalValue, RationalValue), RationalError> {
        self.with_store(|store| Ok((store.get(left)?.clone(), store.get(right)?.clone())))
    }

    /// Release a handle
    pub fn release(&self, handle: Handle) -> Result<(), RationalError> {
        self.with_store_mut(|store| store.release(handle).map(drop))
    }

    /// Number of live values
    pub fn live_count(&self) -> Result<usize, RationalError> {
        self.with_store(|store| Ok(store.live_count()))
    }

    fn with_store<R, F>(&self, f: F) -> Result<R, RationalError>
    where
        F: FnOnce(&ValueStore) -> Result<R, RationalError>,
    {
        let state = self.lock();
        let store = state.store.as_ref().ok_or(RationalError::NotInitialized)?;
        f(store)
    }

    fn with_store_mut<R, F>(&self, f: F) -> Result<R, RationalError>
    where
        F: FnOnce(&mut ValueStore) -> Result<R, RationalError>,
    {
        let mut state = self.lock();
        let store = state.store.as_mut().ok_or(RationalError::NotInitialized)?;
        f(store)
    }

    // A panic while the lock was held cannot leave the table half-updated:
    // every mutation is a single push/pop/assignment.
    fn lock(&self) -> MutexGuard<'_, RuntimeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RationalRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> RationalRuntime {
        let runtime = RationalRuntime::new();
        assert!(runtime.init_with_config(StoreConfig::default()));
        runtime
    }

    #[test]
    fn test_operations_before_init_fail() {
        let runtime = RationalRuntime::new();
        assert!(!runtime.is_initialized());
        assert_eq!(
            runtime.allocate(RationalValue::zero()),
            Err(RationalError::NotInitialized)
        );
        assert_eq!(runtime.live_count(), Err(RationalError::NotInitialized));
    }

    #[test]
    fn test_init_is_idempotent() {
        let runtime = ready();
        let h = runtime.allocate(RationalValue::from_i64(5)).unwrap();
        assert!(!runtime.init_with_config(StoreConfig::default()));
        // The existing store survived the repeated init
        assert_eq!(runtime.get(h).unwrap(), RationalValue::from_i64(5));
    }

    #[test]
    fn test_deinit_invalidates_handles() {
        let runtime = ready();
        let h = runtime.allocate(RationalValue::from_i64(5)).unwrap();
        runtime.allocate(RationalValue::from_i64(6)).unwrap();
        assert_eq!(runtime.deinit(), 2);
        assert_eq!(runtime.get(h), Err(RationalError::NotInitialized));
        assert_eq!(runtime.release(h), Err(RationalError::NotInitialized));
        assert_eq!(runtime.deinit(), 0);
    }

    #[test]
    fn test_stale_handle_after_reinit() {
        let runtime = ready();
        let old = runtime.allocate(RationalValue::from_i64(5)).unwrap();
        runtime.deinit();
        assert!(runtime.init_with_config(StoreConfig::default()));
        let new = runtime.allocate(RationalValue::from_i64(6)).unwrap();
        assert_eq!(old.index(), new.index());
        assert_eq!(runtime.get(old), Err(RationalError::InvalidHandle));
        assert_eq!(runtime.get(new).unwrap(), RationalValue::from_i64(6));
    }

    #[test]
    fn test_get_pair() {
        let runtime = ready();
        let a = runtime.allocate(RationalValue::from_i64(1)).unwrap();
        let b = runtime.allocate(RationalValue::from_i64(2)).unwrap();
        let (x, y) = runtime.get_pair(a, b).unwrap();
        assert_eq!(x, RationalValue::from_i64(1));
        assert_eq!(y, RationalValue::from_i64(2));
        runtime.release(b).unwrap();
        assert_eq!(runtime.get_pair(a, b), Err(RationalError::InvalidHandle));
    }
}
