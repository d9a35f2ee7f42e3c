//! Prelude module - common imports for orderdesk users
//!
//! ```rust
//! use orderdesk::prelude::*;
//! ```

pub use crate::{
    // Cell and grid types
    CellValue,
    // Clock types
    Clock,
    ColumnRef,
    DocId,
    // Error types
    Error,
    FeedError,
    FeedResult,
    FixedClock,
    Grid,
    // Feed service types
    NewOrder,
    // Record types
    OrderRecord,
    // Store types
    OrderStore,
    // Extraction types
    RemoteOrderMapping,
    Result,
    RowExtractor,
    RowMapping,
    Stored,
    SystemClock,
    UploadItem,
    UploadMapping,
    UploadStore,
};
