//! Record types produced by the feed mappings

use chrono::{DateTime, Utc};

/// Quantity assigned when a source cell is absent or unparseable
pub const DEFAULT_QUANTITY: u32 = 1;

/// A row extracted from an uploaded spreadsheet
///
/// Carries no identity of its own; the store assigns an id and a creation
/// timestamp on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UploadItem {
    /// Order name (upload column C)
    pub order_name: String,
    /// Product name (upload column K)
    pub product_name: String,
    /// Option name (upload column L)
    pub option_name: String,
}

/// An order mirrored from one of the external order feeds
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderRecord {
    /// Order number from the source feed
    pub order_number: String,
    /// Product name
    pub product_name: String,
    /// Product barcode
    pub barcode: String,
    /// Ordered quantity, at least 1
    pub quantity: u32,
    /// Order date; falls back to extraction time when the source has none
    pub order_date: DateTime<Utc>,
}

impl OrderRecord {
    /// Create an order with the default quantity and the given date
    pub fn new<S: Into<String>>(
        order_number: S,
        product_name: S,
        barcode: S,
        order_date: DateTime<Utc>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            product_name: product_name.into(),
            barcode: barcode.into(),
            quantity: DEFAULT_QUANTITY,
            order_date,
        }
    }

    /// Set the quantity, keeping the at-least-1 floor
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }
}
