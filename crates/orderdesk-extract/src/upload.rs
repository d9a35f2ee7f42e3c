//! Upload feed mapping
//!
//! Uploaded order spreadsheets carry the fields we keep in three fixed
//! columns: C (order name), K (product name), L (option name). All three are
//! required; a row missing any of them is dropped.

use chrono::{DateTime, Utc};
use orderdesk_core::{CellValue, ColumnRef, Result, UploadItem};

use crate::mapping::RowMapping;

/// Column mapping for the uploaded spreadsheet feed
#[derive(Debug, Clone)]
pub struct UploadMapping {
    /// Order name column (default C)
    pub order_name: ColumnRef,
    /// Product name column (default K)
    pub product_name: ColumnRef,
    /// Option name column (default L)
    pub option_name: ColumnRef,
}

impl Default for UploadMapping {
    fn default() -> Self {
        Self {
            order_name: ColumnRef::parse("C").expect("valid designator"),
            product_name: ColumnRef::parse("K").expect("valid designator"),
            option_name: ColumnRef::parse("L").expect("valid designator"),
        }
    }
}

impl UploadMapping {
    /// Create a mapping from custom column designators
    pub fn new(order_name: &str, product_name: &str, option_name: &str) -> Result<Self> {
        Ok(Self {
            order_name: ColumnRef::parse(order_name)?,
            product_name: ColumnRef::parse(product_name)?,
            option_name: ColumnRef::parse(option_name)?,
        })
    }
}

impl RowMapping for UploadMapping {
    type Record = UploadItem;

    fn columns(&self) -> Vec<usize> {
        vec![
            self.order_name.index(),
            self.product_name.index(),
            self.option_name.index(),
        ]
    }

    fn map_row(&self, row: &[CellValue], _now: DateTime<Utc>) -> Option<UploadItem> {
        Some(UploadItem {
            order_name: row.get(self.order_name.index())?.as_text()?,
            product_name: row.get(self.product_name.index())?.as_text()?,
            option_name: row.get(self.option_name.index())?.as_text()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::RowExtractor;
    use orderdesk_core::{Grid, SystemClock};
    use pretty_assertions::assert_eq;

    fn data_row(order: &str, product: &str, option: &str) -> Vec<CellValue> {
        let mut row = vec![CellValue::Empty; 12];
        row[2] = CellValue::string(order);
        row[10] = CellValue::string(product);
        row[11] = CellValue::string(option);
        row
    }

    #[test]
    fn test_default_designators() {
        let mapping = UploadMapping::default();
        assert_eq!(mapping.columns(), vec![2, 10, 11]);
    }

    #[test]
    fn test_custom_designators() {
        let mapping = UploadMapping::new("A", "B", "AA").unwrap();
        assert_eq!(mapping.columns(), vec![0, 1, 26]);

        assert!(UploadMapping::new("A", "B", "2").is_err());
    }

    #[test]
    fn test_extracts_well_formed_rows() {
        let mut grid = Grid::new();
        grid.push_row(vec![CellValue::string("header"); 12]);
        grid.push_row(data_row("order-1", "widget", "blue"));
        grid.push_row(data_row("order-2", "gadget", "red"));

        let items =
            RowExtractor::default().extract(&grid, &UploadMapping::default(), &SystemClock);
        assert_eq!(
            items,
            vec![
                UploadItem {
                    order_name: "order-1".into(),
                    product_name: "widget".into(),
                    option_name: "blue".into(),
                },
                UploadItem {
                    order_name: "order-2".into(),
                    product_name: "gadget".into(),
                    option_name: "red".into(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_required_cell_drops_row() {
        let mut incomplete = data_row("order-1", "widget", "blue");
        incomplete[10] = CellValue::Empty;

        let mut grid = Grid::new();
        grid.push_row(vec![CellValue::string("header"); 12]);
        grid.push_row(incomplete);

        let items =
            RowExtractor::default().extract(&grid, &UploadMapping::default(), &SystemClock);
        assert!(items.is_empty());
    }

    #[test]
    fn test_blank_string_is_still_present() {
        // An empty string cell is present data, unlike an absent cell
        let grid = Grid::from_rows([
            vec![CellValue::string("header"); 12],
            data_row("order-1", "", "blue"),
        ]);

        let items =
            RowExtractor::default().extract(&grid, &UploadMapping::default(), &SystemClock);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "");
    }

    #[test]
    fn test_numeric_cells_render_as_text() {
        let mut row = data_row("x", "y", "z");
        row[2] = CellValue::Number(20240305.0);

        let grid = Grid::from_rows([vec![CellValue::string("header"); 12], row]);
        let items =
            RowExtractor::default().extract(&grid, &UploadMapping::default(), &SystemClock);
        assert_eq!(items[0].order_name, "20240305");
    }
}
