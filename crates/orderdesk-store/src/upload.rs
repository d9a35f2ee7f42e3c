//! Upload item collection
//!
//! Mirrors the uploaded-spreadsheet collection: bulk insert, newest-first
//! listing, and bulk delete by id. Explicitly constructed and passed to
//! whoever handles requests; nothing here is process-global.

use orderdesk_core::{Clock, SystemClock, UploadItem};

use crate::document::Stored;
use crate::id::{DocId, IdCounter};

/// In-memory collection of uploaded items
pub struct UploadStore {
    clock: Box<dyn Clock>,
    ids: IdCounter,
    items: Vec<Stored<UploadItem>>,
}

impl Default for UploadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadStore {
    /// Create an empty store using wall-clock insertion timestamps
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty store with an injected clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            ids: IdCounter::default(),
            items: Vec::new(),
        }
    }

    /// Insert a batch of items, returning how many were stored
    pub fn insert_many(&mut self, items: Vec<UploadItem>) -> usize {
        let now = self.clock.now();
        let count = items.len();

        for record in items {
            self.items.push(Stored {
                id: self.ids.next_id(),
                created_at: now,
                record,
            });
        }

        log::debug!("stored {count} upload items ({} total)", self.items.len());
        count
    }

    /// All items, newest first
    pub fn items(&self) -> Vec<&Stored<UploadItem>> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        items
    }

    /// Look up a single item by id
    pub fn get(&self, id: DocId) -> Option<&Stored<UploadItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Delete every item whose id is in the given list, returning the number
    /// removed
    ///
    /// Ids that match nothing are ignored rather than reported.
    pub fn delete_many(&mut self, ids: &[DocId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        let removed = before - self.items.len();
        if removed > 0 {
            log::debug!("deleted {removed} upload items");
        }
        removed
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
