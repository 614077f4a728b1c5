//! Infrastructure Layer: Value Store
//!
//! Provides the process-wide storage behind rational handles.
//!
//! ## Overview
//!
//! Callers never hold rational values directly. They hold [`Handle`]s, small
//! integers that index a slot in the [`ValueStore`]. Each slot carries a
//! generation stamp, so a handle that outlived its value (released, or from
//! a store torn down by `deinit`) is detected instead of silently aliasing
//! a newer value.
//!
//! ## Modules
//!
//! - **[`config`](config/index.html)**: Store sizing configuration
//! - **[`handle`](handle/index.html)**: Handle encoding (index + generation)
//! - **[`store`](store/index.html)**: The slot arena with its free-list
//! - **[`runtime`](runtime/index.html)**: Lifecycle (init/deinit) and locking
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): RationalValue stored in slots
//! - [`api_facades`](../../api_facades/index.html): C ABI that hands handles to callers

pub mod config;
pub mod handle;
pub mod runtime;
pub mod store;

pub use config::StoreConfig;
pub use handle::{Handle, SENTINEL};
pub use runtime::{global_runtime, RationalRuntime};
pub use store::ValueStore;
