//! # orderdesk-core
//!
//! Core data structures for the orderdesk back-office library.
//!
//! This crate provides the fundamental types used throughout orderdesk:
//! - [`CellValue`] and [`Grid`] - raw cell data as delivered by a feed
//! - [`ColumnRef`] - spreadsheet-style column designators ("C", "AA")
//! - [`UploadItem`] and [`OrderRecord`] - the typed records feeds produce
//! - [`Clock`] - injectable time source for date fallbacks
//!
//! ## Example
//!
//! ```rust
//! use orderdesk_core::{CellValue, ColumnRef, Grid};
//!
//! let col = ColumnRef::parse("K").unwrap();
//! assert_eq!(col.index(), 10);
//!
//! let mut grid = Grid::new();
//! grid.push_row([CellValue::string("order-1"), CellValue::Number(2.0)]);
//! assert_eq!(grid.cell(0, 1).as_number(), Some(2.0));
//! ```

pub mod cell;
pub mod clock;
pub mod column;
pub mod error;
pub mod grid;
pub mod record;

// Re-exports for convenience
pub use cell::CellValue;
pub use clock::{Clock, FixedClock, SystemClock};
pub use column::ColumnRef;
pub use error::{Error, Result};
pub use grid::Grid;
pub use record::{OrderRecord, UploadItem, DEFAULT_QUANTITY};

/// Maximum number of columns a designator may address (Excel limit)
pub const MAX_COLS: u16 = 16_384;
