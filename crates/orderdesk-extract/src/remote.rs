//! Remote order feed mapping
//!
//! The remote spreadsheet range lays the order fields out at fixed positions.
//! Zero-based column indices with their letter designators:
//!
//! | field        | designator | index |
//! |--------------|------------|-------|
//! | order number | G          | 6     |
//! | order date   | H          | 7     |
//! | product name | I          | 8     |
//! | barcode      | K          | 10    |
//! | quantity     | N          | 13    |
//!
//! Order number, product name, and barcode are required; date and quantity
//! coerce with fallbacks.

use chrono::{DateTime, Utc};
use orderdesk_core::{CellValue, OrderRecord};

use crate::coerce::{date_or, quantity_or_default};
use crate::mapping::RowMapping;

/// Order number column (G)
pub const ORDER_NUMBER: usize = 6;
/// Order date column (H)
pub const ORDER_DATE: usize = 7;
/// Product name column (I)
pub const PRODUCT_NAME: usize = 8;
/// Barcode column (K)
pub const BARCODE: usize = 10;
/// Quantity column (N)
pub const QUANTITY: usize = 13;

/// Column mapping for the remote spreadsheet order feed
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteOrderMapping;

impl RowMapping for RemoteOrderMapping {
    type Record = OrderRecord;

    fn columns(&self) -> Vec<usize> {
        vec![ORDER_NUMBER, ORDER_DATE, PRODUCT_NAME, BARCODE, QUANTITY]
    }

    fn map_row(&self, row: &[CellValue], now: DateTime<Utc>) -> Option<OrderRecord> {
        Some(OrderRecord {
            order_number: row.get(ORDER_NUMBER)?.as_text()?,
            product_name: row.get(PRODUCT_NAME)?.as_text()?,
            barcode: row.get(BARCODE)?.as_text()?,
            quantity: quantity_or_default(row.get(QUANTITY).unwrap_or(&CellValue::Empty)),
            order_date: date_or(row.get(ORDER_DATE).unwrap_or(&CellValue::Empty), now),
        })
    }
}
