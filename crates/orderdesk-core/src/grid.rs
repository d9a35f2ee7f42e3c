//! Raw cell grids
//!
//! A [`Grid`] is the row-major collection of cell values a feed collaborator
//! hands to the extractor: either a decoded upload file or a fetched remote
//! range. Rows may be ragged (shorter than their neighbors); the extractor
//! accounts for that, the grid just stores what it was given.

use crate::cell::CellValue;

/// A ragged grid of raw cell values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of cell values
    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = CellValue>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        }
    }

    /// Append a row to the bottom of the grid
    pub fn push_row<I: IntoIterator<Item = CellValue>>(&mut self, row: I) {
        self.rows.push(row.into_iter().collect());
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Iterate over all rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Number of rows in the grid
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell, treating missing rows and cells beyond a row's end as absent
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::string(*v)).collect()
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows([cells(&["a", "b"]), cells(&["c"])]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row(0).unwrap().len(), 2);
        assert_eq!(grid.row(1).unwrap().len(), 1);
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_cell_out_of_bounds_is_empty() {
        let grid = Grid::from_rows([cells(&["a"])]);
        assert_eq!(grid.cell(0, 0), &CellValue::string("a"));
        assert_eq!(grid.cell(0, 5), &CellValue::Empty);
        assert_eq!(grid.cell(9, 0), &CellValue::Empty);
    }

    #[test]
    fn test_push_row() {
        let mut grid = Grid::new();
        assert!(grid.is_empty());
        grid.push_row(cells(&["x", "y", "z"]));
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.cell(0, 2), &CellValue::string("z"));
    }
}
