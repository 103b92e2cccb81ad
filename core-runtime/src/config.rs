//! # Core Configuration Module
//!
//! Provides configuration management for the browse core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`CoreConfig`] instance holding all dependencies and settings the core
//! needs. It enforces fail-fast validation so a missing host collaborator is
//! reported at startup rather than on first use.
//!
//! ## Required Dependencies
//!
//! - [`UserViewsApi`] - the media server client, implemented by the host
//! - [`SessionProvider`] - the authenticated user context, implemented by the
//!   host
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .api(Arc::new(MyServerClient::new(base_url)))
//!     .session(Arc::new(MySessionManager::shared()))
//!     .columns(5)
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! The builder validates all required dependencies and settings and provides
//! actionable error messages when something is missing or out of range.

use crate::error::{Error, Result};
use bridge_traits::{SessionProvider, UserViewsApi};
use std::sync::Arc;

/// Default number of grid columns when the host does not override it.
pub const DEFAULT_GRID_COLUMNS: usize = 7;

/// Core configuration for the browse core.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Media server API client (required)
    pub api: Arc<dyn UserViewsApi>,

    /// Session context provider (required)
    pub session: Arc<dyn SessionProvider>,

    /// Number of cells per grid row
    pub columns: usize,

    /// Buffer size for the core event bus
    pub event_buffer_size: usize,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("api", &"UserViewsApi { ... }")
            .field("session", &"SessionProvider { ... }")
            .field("columns", &self.columns)
            .field("event_buffer_size", &self.event_buffer_size)
            .finish()
    }
}

impl CoreConfig {
    /// Create a new configuration builder
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::new()
    }
}

/// Builder for [`CoreConfig`].
#[derive(Default)]
pub struct CoreConfigBuilder {
    api: Option<Arc<dyn UserViewsApi>>,
    session: Option<Arc<dyn SessionProvider>>,
    columns: Option<usize>,
    event_buffer_size: Option<usize>,
}

impl CoreConfigBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media server API client
    pub fn api(mut self, api: Arc<dyn UserViewsApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Set the session context provider
    pub fn session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the number of cells per grid row
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the event bus buffer size
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Validate the configuration and build a [`CoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] when a required host collaborator
    /// was not provided, and [`Error::Config`] when a setting is out of range
    /// (`columns` and `event_buffer_size` must both be greater than zero).
    pub fn build(self) -> Result<CoreConfig> {
        let api = self.api.ok_or_else(|| Error::CapabilityMissing {
            capability: "UserViewsApi".to_string(),
            message: "provide a media server client via CoreConfigBuilder::api()".to_string(),
        })?;

        let session = self.session.ok_or_else(|| Error::CapabilityMissing {
            capability: "SessionProvider".to_string(),
            message: "provide a session context via CoreConfigBuilder::session()".to_string(),
        })?;

        let columns = self.columns.unwrap_or(DEFAULT_GRID_COLUMNS);
        if columns == 0 {
            return Err(Error::Config(
                "columns must be greater than zero".to_string(),
            ));
        }

        let event_buffer_size = self
            .event_buffer_size
            .unwrap_or(crate::events::DEFAULT_EVENT_BUFFER_SIZE);
        if event_buffer_size == 0 {
            return Err(Error::Config(
                "event_buffer_size must be greater than zero".to_string(),
            ));
        }

        Ok(CoreConfig {
            api,
            session,
            columns,
            event_buffer_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::api::UserViewsResponse;
    use bridge_traits::session::{Session, StaticSessionProvider, UserId};

    struct NullApi;

    #[async_trait]
    impl UserViewsApi for NullApi {
        async fn get_user_views(
            &self,
            _user_id: &UserId,
        ) -> bridge_traits::Result<UserViewsResponse> {
            Ok(UserViewsResponse {
                items: vec![],
                total_record_count: None,
                start_index: None,
            })
        }
    }

    fn session_provider() -> Arc<StaticSessionProvider> {
        Arc::new(StaticSessionProvider::with_session(Session::new(
            UserId::new(),
        )))
    }

    #[test]
    fn test_build_with_defaults() {
        let config = CoreConfig::builder()
            .api(Arc::new(NullApi))
            .session(session_provider())
            .build()
            .unwrap();

        assert_eq!(config.columns, DEFAULT_GRID_COLUMNS);
        assert_eq!(
            config.event_buffer_size,
            crate::events::DEFAULT_EVENT_BUFFER_SIZE
        );
    }

    #[test]
    fn test_missing_api_fails_fast() {
        let err = CoreConfig::builder()
            .session(session_provider())
            .build()
            .unwrap_err();

        match err {
            Error::CapabilityMissing { capability, .. } => {
                assert_eq!(capability, "UserViewsApi");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_session_fails_fast() {
        let err = CoreConfig::builder().api(Arc::new(NullApi)).build().unwrap_err();

        match err {
            Error::CapabilityMissing { capability, .. } => {
                assert_eq!(capability, "SessionProvider");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = CoreConfig::builder()
            .api(Arc::new(NullApi))
            .session(session_provider())
            .columns(0)
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_elides_trait_objects() {
        let config = CoreConfig::builder()
            .api(Arc::new(NullApi))
            .session(session_provider())
            .columns(5)
            .build()
            .unwrap();

        let debug = format!("{config:?}");
        assert!(debug.contains("UserViewsApi { ... }"));
        assert!(debug.contains("columns: 5"));
    }
}
