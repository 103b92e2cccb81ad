//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the browse core:
//! - Logging and tracing infrastructure
//! - Configuration management with fail-fast validation
//! - Event bus system
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the domain crates depend on. It
//! establishes the logging conventions, the configuration surface hosts use
//! to inject their collaborators, and the event broadcasting mechanism used
//! throughout the system.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder, DEFAULT_GRID_COLUMNS};
pub use error::{Error, Result};
pub use events::{BrowseEvent, CoreEvent, EventBus, SessionEvent};
