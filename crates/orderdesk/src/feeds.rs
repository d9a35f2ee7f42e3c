//! Feed services
//!
//! The operations a request handler calls once its out-of-scope collaborator
//! has produced a grid (decoded upload file, fetched remote range) or a
//! direct order payload. Each one glues the extractor to a store and maps the
//! user-visible failure conditions; transport and decode failures stay with
//! the collaborator.

use chrono::{DateTime, Utc};
use orderdesk_core::{Clock, Grid, OrderRecord, DEFAULT_QUANTITY};
use orderdesk_extract::{RemoteOrderMapping, RowExtractor, UploadMapping};
use orderdesk_store::{DocId, OrderStore, UploadStore};
use thiserror::Error;

/// Result type alias using [`FeedError`]
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// User-visible feed failures
///
/// These cover the conditions a handler reports as bad requests; they are
/// distinct from transport or decode failures, which never reach this layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The grid holds a header at most, no data rows
    #[error("the spreadsheet has no data rows")]
    EmptyGrid,

    /// Every data row was dropped as short or incomplete
    #[error("no usable rows were found in the mapped columns")]
    NoUsableRows,

    /// A direct order add is missing a required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A delete request named no ids
    #[error("no items selected for deletion")]
    NothingSelected,
}

/// Import an uploaded spreadsheet grid into the upload store
///
/// Extracts with the default C/K/L mapping and bulk-inserts the result,
/// returning how many items were stored. A grid with nothing beyond the
/// header is [`FeedError::EmptyGrid`]; a grid whose data rows all fail the
/// mapping is [`FeedError::NoUsableRows`]. The two are distinct user-visible
/// conditions, and neither touches the store.
pub fn import_upload(
    grid: &Grid,
    store: &mut UploadStore,
    clock: &dyn Clock,
) -> FeedResult<usize> {
    let extractor = RowExtractor::default();
    if grid.row_count() <= extractor.header_rows {
        return Err(FeedError::EmptyGrid);
    }

    let items = extractor.extract(grid, &UploadMapping::default(), clock);
    if items.is_empty() {
        return Err(FeedError::NoUsableRows);
    }

    log::info!("importing {} upload items", items.len());
    Ok(store.insert_many(items))
}

/// Refresh the mirrored remote order collection from a fetched grid
///
/// Extracts with the fixed remote mapping, then replaces the whole
/// collection: delete-all, then bulk insert. The empty window between the
/// two steps is designed behavior. A grid yielding zero records is
/// [`FeedError::NoUsableRows`] and leaves the store untouched.
pub fn refresh_remote_orders(
    grid: &Grid,
    store: &mut OrderStore,
    clock: &dyn Clock,
) -> FeedResult<usize> {
    let records = RowExtractor::default().extract(grid, &RemoteOrderMapping, clock);
    if records.is_empty() {
        return Err(FeedError::NoUsableRows);
    }

    log::info!("refreshing remote orders with {} records", records.len());
    Ok(store.replace_all(records))
}

/// A direct order submission before validation
#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    /// Order number (required)
    pub order_number: String,
    /// Product name (required)
    pub product_name: String,
    /// Product barcode (required)
    pub barcode: String,
    /// Ordered quantity; absent or zero becomes 1
    pub quantity: Option<u32>,
    /// Order date; absent becomes the current time
    pub order_date: Option<DateTime<Utc>>,
}

/// Validate and add a directly submitted order
///
/// The three text fields must be non-empty; quantity and date take their
/// documented defaults when absent.
pub fn add_order(
    store: &mut OrderStore,
    new_order: NewOrder,
    clock: &dyn Clock,
) -> FeedResult<DocId> {
    for (name, value) in [
        ("order_number", &new_order.order_number),
        ("product_name", &new_order.product_name),
        ("barcode", &new_order.barcode),
    ] {
        if value.trim().is_empty() {
            return Err(FeedError::MissingField(name));
        }
    }

    let record = OrderRecord {
        order_number: new_order.order_number,
        product_name: new_order.product_name,
        barcode: new_order.barcode,
        quantity: new_order.quantity.unwrap_or(DEFAULT_QUANTITY).max(1),
        order_date: new_order.order_date.unwrap_or_else(|| clock.now()),
    };

    Ok(store.insert(record))
}

/// Delete the selected upload items
///
/// An empty selection is [`FeedError::NothingSelected`]; ids that match
/// nothing are ignored.
pub fn delete_items(store: &mut UploadStore, ids: &[DocId]) -> FeedResult<usize> {
    if ids.is_empty() {
        return Err(FeedError::NothingSelected);
    }
    Ok(store.delete_many(ids))
}
