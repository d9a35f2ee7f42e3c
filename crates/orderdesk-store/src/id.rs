//! Document identifiers

use std::fmt;

/// Identifier assigned to a stored document
///
/// Ids are monotonic per store instance; they order documents by insertion
/// and never repeat within a store, including after deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocId(pub u64);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source shared by the store types
#[derive(Debug, Default)]
pub(crate) struct IdCounter(u64);

impl IdCounter {
    pub(crate) fn next_id(&mut self) -> DocId {
        self.0 += 1;
        DocId(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut counter = IdCounter::default();
        let a = counter.next_id();
        let b = counter.next_id();
        assert!(b > a);
        assert_eq!(a.to_string(), "1");
    }
}
