//! Search across every cell, and summary statistics over a search result.

use crate::table::FungicideTable;

impl FungicideTable {
    /// Rows where any cell contains `term`, ignoring case. The term is a
    /// literal string, not a pattern. A blank term matches every row.
    pub fn search(&self, term: &str) -> FungicideTable {
        let term = term.trim();
        if term.is_empty() {
            return self.clone();
        }
        let needle = term.to_lowercase();
        self.filter_rows(|row| {
            row.iter()
                .flatten()
                .any(|cell| cell.to_lowercase().contains(&needle))
        })
    }
}

/// Shape of a (possibly filtered) view relative to the full table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    /// Fraction of empty cells in the view, in `[0, 1]`.
    pub empty_cell_ratio: f64,
    /// Rows in the view divided by rows in the full table, in `[0, 1]`.
    pub filter_ratio: f64,
}

impl TableSummary {
    pub fn new(view: &FungicideTable, full: &FungicideTable) -> Self {
        let cells = view.row_count() * view.column_count();
        let empty_cell_ratio = if cells == 0 {
            0.0
        } else {
            view.empty_cell_count() as f64 / cells as f64
        };
        let filter_ratio = if full.is_empty() {
            0.0
        } else {
            view.row_count() as f64 / full.row_count() as f64
        };
        Self {
            total_rows: view.row_count(),
            total_columns: view.column_count(),
            empty_cell_ratio,
            filter_ratio,
        }
    }
}
