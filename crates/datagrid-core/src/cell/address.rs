//! Cell addresses and A1 column-letter conversion

use crate::error::{FormatError, FormatErrorKind};
use std::fmt;
use std::str::FromStr;

/// A zero-based grid coordinate
///
/// `(0, 0)` is the top-left cell. In A1 notation the column is written as
/// letters (A, B, ..., Z, AA, ...) and the row as a 1-based number, so
/// `Address::new(2, 99)` displays as `C100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Column index (0-based, A=0, B=1, ..., AA=26)
    pub col: usize,
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
}

impl Address {
    /// Create an address from a column and row index
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Parse a single A1-style reference
    ///
    /// # Examples
    /// ```
    /// use datagrid_core::Address;
    ///
    /// let addr = Address::parse("B3").unwrap();
    /// assert_eq!(addr, Address::new(1, 2));
    ///
    /// let addr = Address::parse("aa10").unwrap();
    /// assert_eq!(addr, Address::new(26, 9));
    /// ```
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let trimmed = s.trim();
        parse_endpoint(s, trimmed)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = column_letters(self.col);
        let row = self.row as u128 + 1;
        result.push_str(&row.to_string());
        result
    }

    /// The same address shifted by a column and row offset, if it fits
    pub fn offset(&self, cols: usize, rows: usize) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(cols)?,
            row: self.row.checked_add(rows)?,
        })
    }
}

impl From<(usize, usize)> for Address {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Convert column letters to a zero-based index (A = 0, Z = 25, AA = 26, etc.)
///
/// Letters are bijective base-26 digits valued 1 to 26, case-insensitive.
/// Returns `None` if `letters` is empty, contains a non-letter, or does not fit
/// in a `usize`.
///
/// ```
/// use datagrid_core::column_index;
///
/// assert_eq!(column_index("A"), Some(0));
/// assert_eq!(column_index("Z"), Some(25));
/// assert_eq!(column_index("AA"), Some(26));
/// assert_eq!(column_index("A1"), None);
/// ```
pub fn column_index(letters: &str) -> Option<usize> {
    decode_column(letters).ok()
}

/// Convert a zero-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_letters(index: usize) -> String {
    let mut result = Vec::new();
    let mut n = index as u128 + 1;

    while n > 0 {
        n -= 1;
        result.push(b'A' + (n % 26) as u8);
        n /= 26;
    }

    result.reverse();
    String::from_utf8(result).unwrap_or_default()
}

fn decode_column(letters: &str) -> Result<usize, FormatErrorKind> {
    if letters.is_empty() {
        return Err(FormatErrorKind::InvalidColumn);
    }

    let mut col: usize = 0;
    for c in letters.bytes() {
        if !c.is_ascii_alphabetic() {
            return Err(FormatErrorKind::InvalidColumn);
        }
        let digit = (c.to_ascii_uppercase() - b'A' + 1) as usize;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or(FormatErrorKind::Overflow)?;
    }

    // non-empty, so col >= 1
    Ok(col - 1)
}

/// Parse one `<letters><digits>` endpoint. `expression` is only used for error
/// reporting.
pub(crate) fn parse_endpoint(expression: &str, token: &str) -> Result<Address, FormatError> {
    let fail = |kind| FormatError::new(expression, token, kind);

    let split = token
        .bytes()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let (letters, digits) = token.split_at(split);

    if letters.is_empty() {
        return Err(fail(FormatErrorKind::InvalidColumn));
    }

    match digits.bytes().next() {
        None => return Err(fail(FormatErrorKind::InvalidRow)),
        Some(b) if b.is_ascii_digit() || b == b'-' || b == b'+' => {}
        // something other than a letter inside the column part, e.g. "A$1" or "A_1"
        Some(_) => return Err(fail(FormatErrorKind::InvalidColumn)),
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail(FormatErrorKind::InvalidRow));
    }

    let col = decode_column(letters).map_err(fail)?;
    let row: usize = digits
        .parse()
        .map_err(|_| fail(FormatErrorKind::Overflow))?;

    if row == 0 {
        return Err(fail(FormatErrorKind::ZeroRow));
    }

    Ok(Address::new(col, row - 1))
}
