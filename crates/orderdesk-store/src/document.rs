//! Stored document wrapper

use chrono::{DateTime, Utc};

use crate::id::DocId;

/// A record together with its storage-assigned identity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stored<T> {
    /// Storage-assigned id
    pub id: DocId,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
    /// The stored record
    pub record: T,
}
