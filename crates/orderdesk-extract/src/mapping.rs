//! Row extraction
//!
//! [`RowExtractor`] walks a grid and applies a [`RowMapping`]: skip the
//! header rows, drop rows too short to cover every mapped column, and let the
//! mapping turn each remaining row into a record or drop it. Malformed rows
//! are excluded from the result, never an error; a caller that wants to treat
//! "nothing usable" specially checks the output length itself.

use chrono::{DateTime, Utc};
use orderdesk_core::{CellValue, Clock, Grid};

/// Maps one data row to a typed record
pub trait RowMapping {
    /// The record type this mapping produces
    type Record;

    /// Zero-based indices of every column the mapping reads
    fn columns(&self) -> Vec<usize>;

    /// Map one row to a record; `None` drops the row
    ///
    /// The extractor has already checked the row covers every mapped column,
    /// so cells may still be `Empty` but never out of bounds. `now` is the
    /// extraction time, used by date fallbacks.
    fn map_row(&self, row: &[CellValue], now: DateTime<Utc>) -> Option<Self::Record>;
}

/// Grid walker applying a [`RowMapping`] row by row
///
/// # Example
/// ```
/// use orderdesk_core::{CellValue, Grid, SystemClock};
/// use orderdesk_extract::{RowExtractor, UploadMapping};
///
/// let mut grid = Grid::new();
/// grid.push_row(vec![CellValue::string("header"); 12]);
/// let mut row = vec![CellValue::Empty; 12];
/// row[2] = CellValue::string("order-1");
/// row[10] = CellValue::string("widget");
/// row[11] = CellValue::string("blue");
/// grid.push_row(row);
///
/// let items = RowExtractor::default().extract(&grid, &UploadMapping::default(), &SystemClock);
/// assert_eq!(items.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RowExtractor {
    /// Rows to skip from the top of the grid
    pub header_rows: usize,
}

impl Default for RowExtractor {
    fn default() -> Self {
        // Both shipped feeds carry a single header row
        Self { header_rows: 1 }
    }
}

impl RowExtractor {
    /// Create an extractor skipping the given number of header rows
    pub fn new(header_rows: usize) -> Self {
        Self { header_rows }
    }

    /// Extract records from a grid, preserving row order
    pub fn extract<M: RowMapping>(
        &self,
        grid: &Grid,
        mapping: &M,
        clock: &dyn Clock,
    ) -> Vec<M::Record> {
        // A row must cover the rightmost mapped column to be considered
        let min_len = mapping
            .columns()
            .into_iter()
            .max()
            .map(|max_col| max_col + 1)
            .unwrap_or(0);

        let now = clock.now();

        grid.rows()
            .skip(self.header_rows)
            .filter(|row| row.len() >= min_len)
            .filter_map(|row| mapping.map_row(row, now))
            .collect()
    }
}
