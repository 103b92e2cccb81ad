//! Row partitioning for the library grid
//!
//! Pure calculation: no I/O, no hidden state. The paginator feeds it the
//! filtered library list and the current pagination flag and publishes
//! whatever comes back.

use crate::models::{LibraryRow, LibraryRowCell};
use bridge_traits::Library;

/// Partition `libraries` into grid rows of at most `columns` cells.
///
/// Behavior contract:
/// - Empty input produces no rows at all, not even a placeholder-only row.
/// - Non-empty input produces `libraries.len() / columns + 1` rows. When the
///   length is an exact multiple of `columns` the final row is empty; callers
///   render it as a zero-height section. This matches the long-standing
///   client behavior and is relied on by section-index consumers.
/// - Every library appears exactly once, in input order, in contiguous
///   chunks.
/// - When `has_next_page` is set, exactly one loading placeholder cell is
///   appended to the final row, regardless of how many real cells it holds.
///
/// `columns` must be greater than zero; the configuration layer enforces
/// this before a paginator is ever constructed.
pub fn calculate_rows(
    libraries: &[Library],
    columns: usize,
    has_next_page: bool,
) -> Vec<LibraryRow> {
    if libraries.is_empty() {
        return Vec::new();
    }

    let row_count = libraries.len() / columns;
    let mut rows = Vec::with_capacity(row_count + 1);

    for section in 0..=row_count {
        let first = section * columns;
        let last = usize::min(first + columns, libraries.len());

        let mut cells: Vec<LibraryRowCell> = libraries[first..last]
            .iter()
            .cloned()
            .map(LibraryRowCell::item)
            .collect();

        if section == row_count && has_next_page {
            cells.push(LibraryRowCell::loading_placeholder());
        }

        rows.push(LibraryRow::new(section, cells));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn libraries(count: usize) -> Vec<Library> {
        (0..count)
            .map(|i| Library {
                id: format!("lib-{}", i),
                name: format!("Library {}", i),
                collection_type: None,
            })
            .collect()
    }

    /// Flatten all non-placeholder cells back into libraries, row order.
    fn flatten(rows: &[LibraryRow]) -> Vec<Library> {
        rows.iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| !cell.is_loading_placeholder)
            .map(|cell| cell.library.clone().unwrap())
            .collect()
    }

    fn placeholder_count(rows: &[LibraryRow]) -> usize {
        rows.iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_loading_placeholder)
            .count()
    }

    #[test]
    fn test_empty_input_produces_no_rows() {
        assert!(calculate_rows(&[], 7, false).is_empty());
        // No placeholder-only row either
        assert!(calculate_rows(&[], 7, true).is_empty());
    }

    #[test]
    fn test_row_count_formula() {
        for count in 1..=40 {
            for columns in 1..=9 {
                let input = libraries(count);
                let rows = calculate_rows(&input, columns, false);
                assert_eq!(
                    rows.len(),
                    count / columns + 1,
                    "count={} columns={}",
                    count,
                    columns
                );
            }
        }
    }

    #[test]
    fn test_partition_preserves_order_exactly_once() {
        for count in 1..=40 {
            for columns in 1..=9 {
                let input = libraries(count);
                let rows = calculate_rows(&input, columns, false);

                assert_eq!(flatten(&rows), input, "count={} columns={}", count, columns);

                for (i, row) in rows.iter().enumerate() {
                    assert_eq!(row.section, i);
                    assert!(row.cells.len() <= columns);
                }
            }
        }
    }

    #[test]
    fn test_placeholder_iff_has_next_page() {
        for count in 1..=25 {
            for columns in 1..=8 {
                let input = libraries(count);

                let without = calculate_rows(&input, columns, false);
                assert_eq!(placeholder_count(&without), 0);

                let with = calculate_rows(&input, columns, true);
                assert_eq!(placeholder_count(&with), 1);

                // Exactly one, located as the last cell of the last row
                let last_row = with.last().unwrap();
                let last_cell = last_row.cells.last().unwrap();
                assert!(last_cell.is_loading_placeholder);
                assert!(last_cell.library.is_none());
            }
        }
    }

    #[test]
    fn test_exact_multiple_keeps_trailing_empty_row() {
        // 14 items in 7 columns: two full rows plus the trailing empty row
        let input = libraries(14);
        let rows = calculate_rows(&input, 7, false);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells.len(), 7);
        assert_eq!(rows[1].cells.len(), 7);
        assert!(rows[2].cells.is_empty());

        assert_eq!(flatten(&rows), input);
    }

    #[test]
    fn test_partial_final_row_with_placeholder() {
        // 10 items in 7 columns with more pages pending
        let input = libraries(10);
        let rows = calculate_rows(&input, 7, true);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells.len(), 7);
        // 3 real cells plus the placeholder
        assert_eq!(rows[1].cells.len(), 4);
        assert!(rows[1].cells[3].is_loading_placeholder);
        assert_eq!(flatten(&rows), input);
    }

    #[test]
    fn test_placeholder_appended_to_empty_trailing_row() {
        // Exact multiple and more pages pending: the placeholder is the only
        // cell of the trailing row
        let input = libraries(14);
        let rows = calculate_rows(&input, 7, true);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].cells.len(), 1);
        assert!(rows[2].cells[0].is_loading_placeholder);
    }

    #[test]
    fn test_fewer_items_than_columns() {
        let input = libraries(3);
        let rows = calculate_rows(&input, 7, false);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section, 0);
        assert_eq!(rows[0].cells.len(), 3);
    }

    #[test]
    fn test_single_column() {
        let input = libraries(4);
        let rows = calculate_rows(&input, 1, false);

        // 4 one-cell rows plus the trailing empty row
        assert_eq!(rows.len(), 5);
        for (i, row) in rows.iter().take(4).enumerate() {
            assert_eq!(row.cells.len(), 1, "row {}", i);
        }
        assert!(rows[4].cells.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = libraries(11);
        let first = calculate_rows(&input, 4, true);
        let second = calculate_rows(&input, 4, true);
        assert_eq!(first, second);
    }
}
