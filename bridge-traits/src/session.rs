//! Session Context Abstraction
//!
//! Exposes the authenticated user's identity to the core. Sign-in flows and
//! credential storage live entirely in the host; the core only needs to know
//! "who is the current user", if anyone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for an authenticated media server user.
///
/// # Examples
///
/// ```
/// use bridge_traits::session::UserId;
///
/// // Create a new random user ID
/// let user_id = UserId::new();
///
/// // Parse from string
/// let id_str = "550e8400-e29b-41d4-a716-446655440000";
/// let user_id = UserId::from_string(id_str).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Snapshot of the currently signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user's identifier
    pub user_id: UserId,
    /// Display name, when the host knows it
    pub user_name: Option<String>,
}

impl Session {
    /// Create a session for the given user
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            user_name: None,
        }
    }

    /// Attach a display name
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }
}

/// Session context trait
///
/// Implemented by the host's session manager. Reads are synchronous: the host
/// is expected to keep the current session in memory and hand out snapshots.
pub trait SessionProvider: Send + Sync {
    /// Get the current session, or `None` when nobody is signed in
    fn current(&self) -> Option<Session>;
}

/// In-memory session provider.
///
/// Suitable for tests and for hosts that manage sign-in elsewhere and only
/// need a place to park the active session.
#[derive(Debug, Default)]
pub struct StaticSessionProvider {
    session: RwLock<Option<Session>>,
}

impl StaticSessionProvider {
    /// Create an empty provider (no user signed in)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with a session already attached
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    /// Replace the current session
    pub fn set_session(&self, session: Session) {
        *self.write_lock() = Some(session);
    }

    /// Clear the current session
    pub fn clear(&self) {
        *self.write_lock() = None;
    }

    // A poisoned lock only means a writer panicked mid-swap; the stored
    // Option is still coherent, so recover the guard.
    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.session
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_rejects_garbage() {
        assert!(UserId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_static_provider_lifecycle() {
        let provider = StaticSessionProvider::new();
        assert!(provider.current().is_none());

        let session = Session::new(UserId::new()).with_user_name("alice");
        provider.set_session(session.clone());
        assert_eq!(provider.current(), Some(session));

        provider.clear();
        assert!(provider.current().is_none());
    }

    #[test]
    fn test_with_session_constructor() {
        let session = Session::new(UserId::new());
        let provider = StaticSessionProvider::with_session(session.clone());
        assert_eq!(provider.current().unwrap().user_id, session.user_id);
    }
}
