//! Range expressions (`"A1:B10"`) and the addresses they cover

use crate::cell::address::parse_endpoint;
use crate::cell::Address;
use crate::error::{FormatError, FormatErrorKind};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Parse a range expression into the addresses it covers, in row-major order
///
/// The rectangle is inclusive on both ends and is walked from its top-left
/// corner regardless of which endpoint was written first.
///
/// # Examples
/// ```
/// use datagrid_core::{parse_range, Address};
///
/// let cells = parse_range("A1:B2").unwrap();
/// assert_eq!(
///     cells,
///     vec![
///         Address::new(0, 0),
///         Address::new(1, 0),
///         Address::new(0, 1),
///         Address::new(1, 1),
///     ]
/// );
///
/// assert!(parse_range("A1B2").is_err());
/// ```
pub fn parse_range(expr: &str) -> Result<Vec<Address>, FormatError> {
    Ok(AddressRange::parse(expr)?.addresses().collect())
}

/// A rectangular span of addresses
///
/// `start` is always the top-left corner and `end` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressRange {
    /// Top-left corner
    pub start: Address,
    /// Bottom-right corner
    pub end: Address,
}

impl AddressRange {
    /// Create a range from two corners in any order
    pub fn new(a: Address, b: Address) -> Self {
        Self {
            start: Address::new(a.col.min(b.col), a.row.min(b.row)),
            end: Address::new(a.col.max(b.col), a.row.max(b.row)),
        }
    }

    /// Create a single-cell range
    pub fn single(addr: Address) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from `<col><row>:<col><row>` notation
    ///
    /// Fails if the colon is missing, if either column is not made of
    /// letters, if either row is not a positive integer, or if the range is
    /// too large to count.
    pub fn parse(expr: &str) -> Result<Self, FormatError> {
        let trimmed = expr.trim();

        let mut parts = trimmed.split(':');
        let (first, second) = match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => (a, b),
            (_, None, _) => {
                return Err(FormatError::new(expr, trimmed, FormatErrorKind::MissingColon))
            }
            _ => {
                return Err(FormatError::new(
                    expr,
                    trimmed,
                    FormatErrorKind::TooManyColons,
                ))
            }
        };

        let start = parse_endpoint(expr, first)?;
        let end = parse_endpoint(expr, second)?;
        let range = Self::new(start, end);

        if range.checked_len().is_none() {
            return Err(FormatError::new(expr, trimmed, FormatErrorKind::Overflow));
        }

        log::trace!("parsed range {expr:?} as {range}");
        Ok(range)
    }

    /// Number of columns spanned, saturating like [`AddressRange::len`]
    pub fn width(&self) -> usize {
        (self.end.col - self.start.col).saturating_add(1)
    }

    /// Number of rows spanned, saturating like [`AddressRange::len`]
    pub fn height(&self) -> usize {
        (self.end.row - self.start.row).saturating_add(1)
    }

    /// Total number of addresses in the range
    ///
    /// Saturates at `usize::MAX` for ranges built with [`AddressRange::new`]
    /// whose size does not fit; parsed ranges always fit.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    fn checked_len(&self) -> Option<usize> {
        (self.end.col - self.start.col)
            .checked_add(1)?
            .checked_mul((self.end.row - self.start.row).checked_add(1)?)
    }

    /// A range always covers at least one address
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if an address is within this range
    pub fn contains(&self, addr: &Address) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Iterate over all addresses in the range (row by row)
    pub fn addresses(&self) -> Addresses {
        Addresses {
            range: *self,
            next: Some(self.start),
            remaining: self.len(),
        }
    }

    /// Format as `A1:B10`
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for AddressRange {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl IntoIterator for AddressRange {
    type Item = Address;
    type IntoIter = Addresses;

    fn into_iter(self) -> Addresses {
        self.addresses()
    }
}

/// Row-major iterator over the addresses of an [`AddressRange`]
#[derive(Debug, Clone)]
pub struct Addresses {
    range: AddressRange,
    next: Option<Address>,
    remaining: usize,
}

impl Iterator for Addresses {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = if current.col < self.range.end.col {
            Some(Address::new(current.col + 1, current.row))
        } else if current.row < self.range.end.row {
            Some(Address::new(self.range.start.col, current.row + 1))
        } else {
            None
        };
        self.remaining = self.remaining.saturating_sub(1);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Addresses {}

impl FusedIterator for Addresses {}
