//! # orderdesk
//!
//! Back-office data layer for a marketplace seller console: upload
//! spreadsheets of order rows, mirror two external order feeds, and serve
//! searchable collections of the result.
//!
//! The HTTP surface, the real document database, and the remote spreadsheet
//! client are collaborators outside this crate. What lives here is everything
//! between them: column designators, the row extractor with its two feed
//! mappings, the in-memory stores, and the feed services gluing them
//! together.
//!
//! ## Example
//!
//! ```rust
//! use orderdesk::prelude::*;
//!
//! // A decoded upload grid: one header row, one data row
//! let mut grid = Grid::new();
//! grid.push_row(vec![CellValue::string("header"); 12]);
//! let mut row = vec![CellValue::Empty; 12];
//! row[2] = CellValue::string("order-1");
//! row[10] = CellValue::string("widget");
//! row[11] = CellValue::string("blue");
//! grid.push_row(row);
//!
//! let mut store = UploadStore::new();
//! let count = orderdesk::feeds::import_upload(&grid, &mut store, &SystemClock).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(store.items()[0].record.order_name, "order-1");
//! ```

pub mod feeds;
pub mod prelude;

// Re-export feed service types
pub use feeds::{FeedError, FeedResult, NewOrder};

// Re-export core types
pub use orderdesk_core::{
    CellValue, Clock, ColumnRef, Error, FixedClock, Grid, OrderRecord, Result, SystemClock,
    UploadItem, DEFAULT_QUANTITY, MAX_COLS,
};

// Re-export extraction types
pub use orderdesk_extract::{RemoteOrderMapping, RowExtractor, RowMapping, UploadMapping};

// Re-export store types
pub use orderdesk_store::{DocId, OrderStore, Stored, UploadStore};
