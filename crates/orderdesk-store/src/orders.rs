//! Order collections
//!
//! One [`OrderStore`] instance backs each mirrored feed: the BR collection
//! (populated by direct adds) and the China collection (repopulated wholesale
//! by refresh). Search is case-insensitive substring matching over the three
//! text fields, newest order date first.
//!
//! [`OrderStore::replace_all`] is delete-all followed by bulk insert, as two
//! observable steps. A reader interleaving between them sees an empty store;
//! that transient window is designed behavior, not an error.

use orderdesk_core::{Clock, OrderRecord, SystemClock};

use crate::document::Stored;
use crate::id::{DocId, IdCounter};

/// In-memory collection of mirrored orders
pub struct OrderStore {
    clock: Box<dyn Clock>,
    ids: IdCounter,
    orders: Vec<Stored<OrderRecord>>,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    /// Create an empty store using wall-clock insertion timestamps
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty store with an injected clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            ids: IdCounter::default(),
            orders: Vec::new(),
        }
    }

    /// Insert a single order, returning its assigned id
    pub fn insert(&mut self, record: OrderRecord) -> DocId {
        let id = self.ids.next_id();
        self.orders.push(Stored {
            id,
            created_at: self.clock.now(),
            record,
        });
        id
    }

    /// Insert a batch of orders, returning how many were stored
    pub fn insert_many(&mut self, records: Vec<OrderRecord>) -> usize {
        let count = records.len();
        for record in records {
            self.insert(record);
        }
        log::debug!("stored {count} orders ({} total)", self.orders.len());
        count
    }

    /// Remove every order, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.orders.len();
        self.orders.clear();
        removed
    }

    /// Replace the whole collection: delete everything, then insert the batch
    ///
    /// Not atomic with respect to concurrent readers; a read between the two
    /// steps observes zero orders.
    pub fn replace_all(&mut self, records: Vec<OrderRecord>) -> usize {
        let removed = self.clear();
        let inserted = self.insert_many(records);
        log::info!("replaced {removed} orders with {inserted}");
        inserted
    }

    /// Orders matching the search term, newest order date first
    ///
    /// The term matches case-insensitively as a substring of the order
    /// number, product name, or barcode. `None` (or an empty term) returns
    /// everything.
    pub fn search(&self, term: Option<&str>) -> Vec<&Stored<OrderRecord>> {
        let needle = term.map(str::to_lowercase).unwrap_or_default();

        let mut matches: Vec<_> = self
            .orders
            .iter()
            .filter(|stored| {
                needle.is_empty() || {
                    let r = &stored.record;
                    r.order_number.to_lowercase().contains(&needle)
                        || r.product_name.to_lowercase().contains(&needle)
                        || r.barcode.to_lowercase().contains(&needle)
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.record
                .order_date
                .cmp(&a.record.order_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        matches
    }

    /// All orders, newest order date first
    pub fn all(&self) -> Vec<&Stored<OrderRecord>> {
        self.search(None)
    }

    /// Look up a single order by id
    pub fn get(&self, id: DocId) -> Option<&Stored<OrderRecord>> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Number of stored orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the store holds no orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use orderdesk_core::FixedClock;
    use pretty_assertions::assert_eq;

    fn order(number: &str, product: &str, barcode: &str, day: u32) -> OrderRecord {
        OrderRecord::new(
            number,
            product,
            barcode,
            Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
        )
    }

    fn fixed_store() -> OrderStore {
        let instant = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        OrderStore::with_clock(Box::new(FixedClock(instant)))
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut store = fixed_store();
        store.insert(order("ORD-100", "Blue Widget", "8801", 1));
        store.insert(order("ORD-200", "Red Gadget", "8802", 2));

        assert_eq!(store.search(Some("widget")).len(), 1);
        assert_eq!(store.search(Some("ORD")).len(), 2);
        assert_eq!(store.search(Some("ord-2")).len(), 1);
        assert_eq!(store.search(Some("8802")).len(), 1);
        assert_eq!(store.search(Some("missing")).len(), 0);
    }

    #[test]
    fn test_search_none_returns_all_newest_first() {
        let mut store = fixed_store();
        store.insert(order("ORD-1", "a", "1", 1));
        store.insert(order("ORD-3", "c", "3", 3));
        store.insert(order("ORD-2", "b", "2", 2));

        let numbers: Vec<_> = store
            .search(None)
            .iter()
            .map(|o| o.record.order_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["ORD-3", "ORD-2", "ORD-1"]);
    }

    #[test]
    fn test_replace_all() {
        let mut store = fixed_store();
        store.insert(order("OLD-1", "a", "1", 1));
        store.insert(order("OLD-2", "b", "2", 2));

        let inserted = store.replace_all(vec![order("NEW-1", "c", "3", 3)]);
        assert_eq!(inserted, 1);
        assert_eq!(store.len(), 1);
        assert!(store.search(Some("OLD")).is_empty());
    }

    #[test]
    fn test_refresh_empty_window_is_observable() {
        // replace_all is clear + insert_many; a reader between the two steps
        // sees an empty collection
        let mut store = fixed_store();
        store.insert(order("OLD-1", "a", "1", 1));

        store.clear();
        assert!(store.all().is_empty());

        store.insert_many(vec![order("NEW-1", "b", "2", 2)]);
        assert_eq!(store.all().len(), 1);
    }
}
