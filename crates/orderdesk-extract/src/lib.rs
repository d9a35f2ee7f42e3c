//! # orderdesk-extract
//!
//! Row extraction for the orderdesk feeds: a grid of raw cell values goes in,
//! typed records come out. Header rows are skipped, short or incomplete rows
//! are dropped silently, and date/quantity tokens coerce to documented
//! fallbacks. The extractor performs no I/O and owns no state; callers supply
//! the grid and persist the result.

mod coerce;
mod mapping;
mod remote;
mod upload;

pub use coerce::{date_or, quantity_or_default};
pub use mapping::{RowExtractor, RowMapping};
pub use remote::RemoteOrderMapping;
pub use upload::UploadMapping;
