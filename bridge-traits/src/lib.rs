//! # Host Bridge Traits
//!
//! Collaborator contracts that must be implemented by each host application.
//!
//! ## Overview
//!
//! This crate defines the seam between the browse core and the pieces the
//! host already owns. The core deliberately has no HTTP transport and no
//! sign-in flow of its own; it asks the host for both through these traits.
//!
//! ## Traits
//!
//! - [`UserViewsApi`](api::UserViewsApi) - Async "list user views" endpoint of
//!   the media server, implemented over the host's networking stack
//! - [`SessionProvider`](session::SessionProvider) - Current authenticated
//!   user context, implemented by the host's session manager
//!
//! ## Default Implementations
//!
//! [`StaticSessionProvider`](session::StaticSessionProvider) ships here as a
//! simple in-memory session holder for hosts and tests that do not need
//! anything richer.

pub mod api;
pub mod error;
pub mod session;

pub use api::{CollectionType, Library, UserViewsApi, UserViewsResponse};
pub use error::{BridgeError, Result};
pub use session::{Session, SessionProvider, StaticSessionProvider, UserId};
