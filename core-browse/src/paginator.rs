//! # Library Grid Paginator
//!
//! View-model for the movie-library grid. It owns the filtered library list
//! and the fixed column count; on demand it fetches the user's views from the
//! media server, keeps only movie libraries, and republishes the grid rows.
//!
//! ## Published state
//!
//! The GUI layer observes three `tokio::sync::watch` channels:
//!
//! - [`rows`](LibraryGridPaginator::rows) - the calculated grid rows
//! - [`pagination`](LibraryGridPaginator::pagination) - page counters and the
//!   next/previous flags
//! - [`loading`](LibraryGridPaginator::loading) - whether a request is
//!   in flight on this instance
//!
//! Navigation and errors surface on the shared [`EventBus`]: a
//! `NavigateToLibrary` event when exactly one movie library exists, and
//! `RequestFailed`/`Unauthorized` events when the fetch fails.
//!
//! ## Overlapping requests
//!
//! Calls are not deduplicated, but each carries a generation stamp; a
//! completion whose generation has been superseded by a newer call discards
//! its result instead of overwriting fresher state. The loading channel reads
//! `true` while at least one request is outstanding.

use crate::error::{BrowseError, Result};
use crate::grid::calculate_rows;
use crate::models::{LibraryRow, PaginationState};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use bridge_traits::{BridgeError, CollectionType, Library, SessionProvider, UserViewsApi};
use core_runtime::config::CoreConfig;
use core_runtime::events::{BrowseEvent, CoreEvent, EventBus, SessionEvent};
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, instrument, warn};

/// View-model binding the movie-library grid to the media server.
pub struct LibraryGridPaginator {
    api: Arc<dyn UserViewsApi>,
    session: Arc<dyn SessionProvider>,
    events: EventBus,
    columns: usize,

    /// Filtered movie libraries from the most recent applied fetch
    libraries: RwLock<Vec<Library>>,

    /// Stamp of the most recent `request_libraries` call
    generation: AtomicU64,
    /// Number of requests currently outstanding on this instance
    in_flight: AtomicUsize,

    rows_tx: watch::Sender<Vec<LibraryRow>>,
    pagination_tx: watch::Sender<PaginationState>,
    loading_tx: watch::Sender<bool>,
}

impl LibraryGridPaginator {
    /// Create a paginator from a validated configuration.
    ///
    /// The configuration guarantees `columns > 0`; the paginator shares the
    /// given event bus with the rest of the application.
    pub fn new(config: CoreConfig, events: EventBus) -> Self {
        let (rows_tx, _) = watch::channel(Vec::new());
        let (pagination_tx, _) = watch::channel(PaginationState::default());
        let (loading_tx, _) = watch::channel(false);

        Self {
            api: config.api,
            session: config.session,
            events,
            columns: config.columns,
            libraries: RwLock::new(Vec::new()),
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            rows_tx,
            pagination_tx,
            loading_tx,
        }
    }

    /// Subscribe to the published grid rows.
    pub fn rows(&self) -> watch::Receiver<Vec<LibraryRow>> {
        self.rows_tx.subscribe()
    }

    /// Subscribe to the published pagination state.
    pub fn pagination(&self) -> watch::Receiver<PaginationState> {
        self.pagination_tx.subscribe()
    }

    /// Subscribe to the per-instance loading indicator.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading_tx.subscribe()
    }

    /// Number of cells per grid row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Snapshot of the filtered movie libraries.
    pub async fn libraries(&self) -> Vec<Library> {
        self.libraries.read().await.clone()
    }

    /// Fetch the user's views, filter for movie libraries, and republish.
    ///
    /// On success with zero or two-plus movie libraries, replaces the
    /// internal list and publishes freshly calculated rows. With exactly one
    /// movie library, emits `BrowseEvent::NavigateToLibrary` and leaves the
    /// rows untouched so the grid is bypassed entirely.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::SessionMissing`] when no user is signed in and
    /// [`BrowseError::Api`] when the server request fails. In both cases the
    /// published state keeps its last-known-good values, and a matching
    /// event is emitted on the bus.
    #[instrument(skip(self))]
    pub async fn request_libraries(&self) -> Result<()> {
        let Some(session) = self.session.current() else {
            warn!("request_libraries called with no session attached");
            self.events
                .emit(CoreEvent::Session(SessionEvent::Missing))
                .ok();
            return Err(BrowseError::SessionMissing);
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.begin_request();
        debug!(user_id = %session.user_id, generation, "requesting user views");

        let result = self.api.get_user_views(&session.user_id).await;
        self.end_request();

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded response");
            return Ok(());
        }

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "user views request failed");
                self.emit_failure(&err);
                return Err(err.into());
            }
        };

        let total_count = response.items.len();
        let movies: Vec<Library> = response
            .items
            .into_iter()
            .filter(|library| library.is_collection(CollectionType::Movies))
            .collect();
        let movie_count = movies.len();

        if movie_count == 1 {
            let library = movies[0].clone();
            *self.libraries.write().await = movies;

            info!(library_id = %library.id, "single movie library, routing directly");
            self.events
                .emit(CoreEvent::Browse(BrowseEvent::NavigateToLibrary {
                    library_id: library.id,
                    title: library.name,
                    collection_type: library
                        .collection_type
                        .map(|kind| kind.as_str().to_string())
                        .unwrap_or_default(),
                }))
                .ok();
            return Ok(());
        }

        let has_next_page = self.pagination_tx.borrow().has_next_page;
        let rows = calculate_rows(&movies, self.columns, has_next_page);
        *self.libraries.write().await = movies;

        debug!(movie_count, rows = rows.len(), "publishing grid rows");
        self.rows_tx.send_replace(rows);
        self.events
            .emit(CoreEvent::Browse(BrowseEvent::LibrariesLoaded {
                movie_count,
                total_count,
            }))
            .ok();

        Ok(())
    }

    fn emit_failure(&self, err: &BridgeError) {
        let event = if err.is_auth_error() {
            CoreEvent::Session(SessionEvent::Unauthorized {
                message: err.to_string(),
            })
        } else {
            CoreEvent::Browse(BrowseEvent::RequestFailed {
                message: err.to_string(),
                recoverable: !matches!(err, BridgeError::Decode(_)),
            })
        };
        self.events.emit(event).ok();
    }

    fn begin_request(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.loading_tx.send_replace(true);
    }

    fn end_request(&self) {
        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        self.loading_tx.send_replace(remaining > 0);
    }
}

impl std::fmt::Debug for LibraryGridPaginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryGridPaginator")
            .field("columns", &self.columns)
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish()
    }
}
