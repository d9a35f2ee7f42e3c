//! Column designators
//!
//! Spreadsheet feeds refer to columns by letter labels ("C", "K", "AA").
//! The labels are bijective base-26: A=1 .. Z=26, AA=27, with no zero digit,
//! stored internally as a zero-based index (A=0).

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A column reference (e.g. "C", "AA"), stored as a zero-based index
///
/// # Examples
/// ```
/// use orderdesk_core::ColumnRef;
///
/// let col = ColumnRef::parse("C").unwrap();
/// assert_eq!(col.index(), 2);
/// assert_eq!(col.to_string(), "C");
///
/// assert_eq!(ColumnRef::parse("AA").unwrap().index(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnRef(u16);

impl ColumnRef {
    /// Create a column reference from a zero-based index
    pub fn from_index(index: u16) -> Result<Self> {
        if index >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(index as u32, MAX_COLS - 1));
        }
        Ok(ColumnRef(index))
    }

    /// Parse a column reference from letters (case-insensitive)
    pub fn parse(letters: &str) -> Result<Self> {
        let letters = letters.trim();
        if letters.is_empty() {
            return Err(Error::InvalidColumn("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidColumn(format!(
                    "invalid column letter '{}' in '{}'",
                    c, letters
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return Err(Error::ColumnOutOfBounds(col - 1, MAX_COLS - 1));
            }
        }

        // Convert to 0-based
        Ok(ColumnRef((col - 1) as u16))
    }

    /// The zero-based column index
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Format as letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn to_letters(&self) -> String {
        let mut result = String::new();
        let mut n = self.0 as u32 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_letters())
    }
}

impl FromStr for ColumnRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
