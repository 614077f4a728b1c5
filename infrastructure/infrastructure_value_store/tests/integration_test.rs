//! Integration tests for infrastructure_value_store crate
//!
//! These tests verify the store lifecycle, handle validity and concurrent
//! access through a shared runtime.

use std::sync::Arc;
use std::thread;

use entities_utilities::{RationalError, RationalValue};
use infrastructure_value_store::*;
use serial_test::serial;

#[test]
fn test_handles_are_non_negative() {
    let runtime = RationalRuntime::new();
    runtime.init_with_config(StoreConfig::default());
    for n in 0..1000 {
        let h = runtime.allocate(RationalValue::from_i64(n)).unwrap();
        assert!(h.to_raw() >= 0);
        assert_ne!(h.to_raw(), SENTINEL);
        if n % 3 == 0 {
            runtime.release(h).unwrap();
        }
    }
}

#[test]
fn test_raw_handle_round_trip_through_runtime() {
    let runtime = RationalRuntime::new();
    runtime.init_with_config(StoreConfig::default());
    let h = runtime.allocate(RationalValue::from_fraction(1, 3).unwrap()).unwrap();
    let decoded = Handle::from_raw(h.to_raw()).unwrap();
    assert_eq!(
        runtime.get(decoded).unwrap(),
        RationalValue::from_fraction(1, 3).unwrap()
    );
}

#[test]
fn test_limited_runtime_reports_out_of_memory() {
    let runtime = RationalRuntime::new();
    runtime.init_with_config(StoreConfig {
        initial_capacity: 1,
        max_slots: 3,
    });
    let handles: Vec<_> = (0..3)
        .map(|n| runtime.allocate(RationalValue::from_i64(n)).unwrap())
        .collect();
    assert_eq!(
        runtime.allocate(RationalValue::zero()),
        Err(RationalError::OutOfMemory)
    );
    runtime.release(handles[0]).unwrap();
    let reused = runtime.allocate(RationalValue::zero()).unwrap();
    assert_eq!(reused.index(), 0);
}

#[test]
fn test_concurrent_allocate_release() {
    let runtime = Arc::new(RationalRuntime::new());
    runtime.init_with_config(StoreConfig::default());

    let workers: Vec<_> = (0..8)
        .map(|t| {
            let runtime = Arc::clone(&runtime);
            thread::spawn(move || {
                for n in 0..200 {
                    let value = RationalValue::from_fraction(n, t + 1).unwrap();
                    let h = runtime.allocate(value.clone()).unwrap();
                    assert_eq!(runtime.get(h).unwrap(), value);
                    runtime.release(h).unwrap();
                    assert_eq!(runtime.get(h), Err(RationalError::InvalidHandle));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(runtime.live_count(), Ok(0));
}

#[test]
#[serial]
fn test_global_runtime_lifecycle() {
    let runtime = global_runtime();
    runtime.deinit();
    assert!(!runtime.is_initialized());
    assert!(runtime.init());
    assert!(!runtime.init());
    let h = runtime.allocate(RationalValue::from_i64(9)).unwrap();
    assert_eq!(runtime.deinit(), 1);
    assert_eq!(runtime.get(h), Err(RationalError::NotInitialized));
}
