//! # orderdesk-store
//!
//! In-memory document collections backing the orderdesk feeds. Each store is
//! an explicitly constructed value handed to request handlers; documents get
//! a monotonic [`DocId`] and a creation timestamp on insert.
//!
//! The model is single-threaded and request-scoped: methods take `&mut self`
//! and callers own any sharing strategy.

mod document;
mod id;
mod orders;
mod upload;

pub use document::Stored;
pub use id::DocId;
pub use orders::OrderStore;
pub use upload::UploadStore;
