//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (`bridge-traits`, `core-runtime`, `core-browse`). Host
//! applications can depend on `mbc-workspace` and enable the documented
//! features without needing to wire each crate individually.

#[cfg(feature = "browse")]
pub use bridge_traits;
#[cfg(feature = "browse")]
pub use core_browse;
#[cfg(feature = "browse")]
pub use core_runtime;
