//! Rectangular cell grids extracted from table geometries.
//!
//! Raw extraction output may contain missing cells and ragged rows. A
//! [`TableGrid`] is only built from rectangular input; missing cells become
//! empty strings and every cell is trimmed.

use crate::error::{Error, Result};

/// Raw extraction output: rows of optional cell values.
pub type RawGrid = Vec<Vec<Option<String>>>;

/// A rectangular, row-major grid of trimmed cell strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Normalize raw extraction output into a grid.
    ///
    /// Missing cells become `""` and cells are trimmed. Rows of differing
    /// length are rejected with [`Error::RaggedGrid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::layout::TableGrid;
    ///
    /// let grid = TableGrid::from_raw(vec![
    ///     vec![Some(" A ".to_string()), None],
    ///     vec![Some("C".to_string()), Some("D".to_string())],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(grid.rows()[0], vec!["A".to_string(), String::new()]);
    /// assert_eq!(grid.non_empty_cells(), 3);
    /// ```
    pub fn from_raw(raw: RawGrid) -> Result<Self> {
        let expected = raw.first().map(Vec::len).unwrap_or(0);
        if let Some((row, cells)) = raw.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(Error::RaggedGrid {
                row,
                expected,
                found: cells.len(),
            });
        }

        let rows = raw
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.map(|c| c.trim().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }

    /// Grid rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Consume the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Number of non-empty cells.
    pub fn non_empty_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Fraction of non-empty cells; 0.0 for a grid without cells.
    pub fn fill_ratio(&self) -> f32 {
        let total = self.cell_count();
        if total == 0 {
            return 0.0;
        }
        self.non_empty_cells() as f32 / total as f32
    }

    /// Detection score used to rank strategies: `fill_ratio * cell_count`.
    pub fn detection_score(&self) -> f32 {
        self.fill_ratio() * self.cell_count() as f32
    }

    /// Drop rows where every cell is empty.
    ///
    /// Returns `None` when nothing is left, so empty tables are never emitted.
    pub fn cleaned(self) -> Option<Self> {
        let rows: Vec<Vec<String>> = self
            .rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect();

        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }
}
