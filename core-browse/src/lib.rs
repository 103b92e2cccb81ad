//! # Library Browse Module
//!
//! Owns the movie-library grid view-model: fetching the user's views from
//! the media server, filtering for movie libraries, and partitioning the
//! result into fixed-width rows for grid display.
//!
//! ## Overview
//!
//! - [`LibraryGridPaginator`] - the view-model; fetches, filters, and
//!   publishes reactive grid state over `tokio::sync::watch`
//! - [`calculate_rows`](grid::calculate_rows) - the pure row-partitioning
//!   function, including the trailing loading placeholder
//! - [`models`] - the row/cell/pagination types the GUI renders
//!
//! Host collaborators (the server client and the session context) come in
//! through [`bridge_traits`]; navigation and error events go out on the
//! [`core_runtime`] event bus.

pub mod error;
pub mod grid;
pub mod models;
pub mod paginator;

pub use error::{BrowseError, Result};
pub use grid::calculate_rows;
pub use models::{LibraryRow, LibraryRowCell, PaginationState};
pub use paginator::LibraryGridPaginator;
