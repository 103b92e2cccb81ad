//! Media Server API Abstraction
//!
//! Defines the contract between the core and the host-provided media server
//! client, plus the wire types the "user views" endpoint returns.
//!
//! The core never owns an HTTP transport. Host platforms implement
//! [`UserViewsApi`] on top of whatever networking stack they already use and
//! hand it in through the runtime configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::UserId;

/// Collection type tag a media server assigns to each library.
///
/// The wire format uses lowercase tags (`"movies"`, `"tvshows"`, ...).
/// Unrecognized tags deserialize as [`CollectionType::Unknown`] so that new
/// server-side library kinds never fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    Movies,
    TvShows,
    Music,
    #[serde(other)]
    Unknown,
}

impl CollectionType {
    /// Get the wire tag for this collection type
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Movies => "movies",
            CollectionType::TvShows => "tvshows",
            CollectionType::Music => "music",
            CollectionType::Unknown => "unknown",
        }
    }
}

/// One media library as returned by the server.
///
/// Owned by the server; the core only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Library {
    /// Server-assigned library identifier
    pub id: String,
    /// Display title
    pub name: String,
    /// Collection type tag, absent for untyped folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<CollectionType>,
}

impl Library {
    /// Whether this library holds the given collection type
    pub fn is_collection(&self, kind: CollectionType) -> bool {
        self.collection_type == Some(kind)
    }
}

/// Envelope returned by the "list user views" endpoint.
///
/// `total_record_count` and `start_index` describe the server-side paging
/// window; callers that only need the items can ignore them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserViewsResponse {
    /// Libraries visible to the requesting user, in server order
    #[serde(default)]
    pub items: Vec<Library>,
    /// Total number of records across all pages, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_record_count: Option<u64>,
    /// Zero-based index of the first returned record, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u64>,
}

/// Async media server API trait
///
/// Implementations are expected to handle transport concerns themselves
/// (TLS, connection pooling, access-token injection). Failures of any kind
/// surface as [`BridgeError`](crate::error::BridgeError); this layer does not
/// retry.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::api::UserViewsApi;
/// use bridge_traits::session::UserId;
///
/// async fn count_views(api: &dyn UserViewsApi, user_id: &UserId) -> usize {
///     match api.get_user_views(user_id).await {
///         Ok(response) => response.items.len(),
///         Err(_) => 0,
///     }
/// }
/// ```
#[async_trait]
pub trait UserViewsApi: Send + Sync {
    /// List the media libraries visible to the given user.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The network request fails
    /// - The server rejects the user's credentials
    /// - The response body cannot be decoded
    async fn get_user_views(&self, user_id: &UserId) -> Result<UserViewsResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user_views_response() {
        let json = r#"{
            "Items": [
                {"Id": "a1", "Name": "Movies", "CollectionType": "movies"},
                {"Id": "b2", "Name": "Shows", "CollectionType": "tvshows"},
                {"Id": "c3", "Name": "Misc"}
            ],
            "TotalRecordCount": 3,
            "StartIndex": 0
        }"#;

        let response: UserViewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.total_record_count, Some(3));
        assert_eq!(response.start_index, Some(0));

        assert_eq!(response.items[0].id, "a1");
        assert!(response.items[0].is_collection(CollectionType::Movies));
        assert!(response.items[1].is_collection(CollectionType::TvShows));
        assert_eq!(response.items[2].collection_type, None);
    }

    #[test]
    fn test_decode_unknown_collection_type() {
        let json = r#"{"Id": "d4", "Name": "Books", "CollectionType": "books"}"#;
        let library: Library = serde_json::from_str(json).unwrap();
        assert_eq!(library.collection_type, Some(CollectionType::Unknown));
        assert!(!library.is_collection(CollectionType::Movies));
    }

    #[test]
    fn test_decode_empty_envelope() {
        let response: UserViewsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.total_record_count, None);
    }

    #[test]
    fn test_collection_type_wire_tags() {
        assert_eq!(CollectionType::Movies.as_str(), "movies");
        assert_eq!(CollectionType::TvShows.as_str(), "tvshows");
        assert_eq!(
            serde_json::to_string(&CollectionType::Movies).unwrap(),
            "\"movies\""
        );
    }
}
