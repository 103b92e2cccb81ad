//! Grid layout types published to the GUI layer

use bridge_traits::Library;
use serde::{Deserialize, Serialize};

/// One cell of the library grid.
///
/// Either wraps a [`Library`] or marks the trailing loading placeholder.
/// Cells are rebuilt from scratch on every row calculation; no identity
/// persists across recalculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRowCell {
    /// The library shown in this cell, absent for placeholder cells
    pub library: Option<Library>,
    /// Whether this cell renders as the "more pages loading" placeholder
    pub is_loading_placeholder: bool,
}

impl LibraryRowCell {
    /// Create a cell wrapping a library
    pub fn item(library: Library) -> Self {
        Self {
            library: Some(library),
            is_loading_placeholder: false,
        }
    }

    /// Create the trailing loading placeholder cell
    pub fn loading_placeholder() -> Self {
        Self {
            library: None,
            is_loading_placeholder: true,
        }
    }
}

/// One horizontal slice of the grid.
///
/// Rows are superseded wholesale on each recalculation; there is no
/// incremental diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRow {
    /// Zero-based position of this row among all rows
    pub section: usize,
    /// Cells in display order, at most `columns` real cells plus the
    /// optional trailing placeholder
    pub cells: Vec<LibraryRowCell>,
}

impl LibraryRow {
    /// Create a row at the given section index
    pub fn new(section: usize, cells: Vec<LibraryRowCell>) -> Self {
        Self { section, cells }
    }
}

/// Externally observable pagination state.
///
/// Mutated only by the fetch pipeline, never by row calculation. The current
/// pipeline does not derive `total_pages`/`current_page` from the response,
/// so they stay at their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Total number of pages reported by the pipeline
    pub total_pages: u32,
    /// Current page number (0-indexed)
    pub current_page: u32,
    /// Whether more pages exist after the current one
    pub has_next_page: bool,
    /// Whether pages exist before the current one
    pub has_previous_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(id: &str) -> Library {
        Library {
            id: id.to_string(),
            name: format!("Library {}", id),
            collection_type: None,
        }
    }

    #[test]
    fn test_item_cell() {
        let cell = LibraryRowCell::item(library("a"));
        assert!(cell.library.is_some());
        assert!(!cell.is_loading_placeholder);
    }

    #[test]
    fn test_placeholder_cell() {
        let cell = LibraryRowCell::loading_placeholder();
        assert!(cell.library.is_none());
        assert!(cell.is_loading_placeholder);
    }

    #[test]
    fn test_pagination_state_defaults() {
        let state = PaginationState::default();
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.current_page, 0);
        assert!(!state.has_next_page);
        assert!(!state.has_previous_page);
    }
}
