//! Cell address and range types

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A zero-based cell position
///
/// Displayed in A1 notation: row 0, column 0 is `A1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based, A=0)
    pub col: u16,
}

impl CellAddress {
    /// Create an address without bounds checking
    pub const fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Create an address, checking it lies inside a worksheet
    pub fn checked(row: u32, col: u16) -> Result<Self> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }
        Ok(Self { row, col })
    }

    /// Parse `A1`-style notation; `$` markers are accepted and ignored
    pub fn parse(s: &str) -> Result<Self> {
        let cleaned: String = s.trim().chars().filter(|c| *c != '$').collect();
        let split = cleaned
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| Error::InvalidAddress(format!("no row number in '{}'", s)))?;
        let (letters, digits) = cleaned.split_at(split);

        let col = column_index(letters)
            .ok_or_else(|| Error::InvalidAddress(format!("bad column letters in '{}'", s)))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        if col >= MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        Self::checked(row - 1, col as u16)
    }

    /// Column letters for a zero-based index (0 = A, 26 = AA)
    pub fn column_letters(col: u16) -> String {
        let mut letters = Vec::new();
        let mut n = col as u32 + 1;
        while n > 0 {
            n -= 1;
            letters.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        letters.reverse();
        String::from_utf8_lossy(&letters).into_owned()
    }
}

/// Zero-based column index for letters, `None` if they are not all ASCII letters
fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }
    letters.bytes().try_fold(0u32, |acc, b| {
        b.is_ascii_alphabetic()
            .then(|| acc * 26 + (b.to_ascii_uppercase() - b'A') as u32 + 1)
    })
    .map(|one_based| one_based - 1)
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.col), self.row + 1)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular block of cells, normalised so `start` is top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Top-left cell
    pub start: CellAddress,
    /// Bottom-right cell
    pub end: CellAddress,
}

impl CellRange {
    /// Create a range spanning two corners in any order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Create a range from corner indices, checking both corners are in bounds
    pub fn from_indices(
        start_row: u32,
        start_col: u16,
        end_row: u32,
        end_col: u16,
    ) -> Result<Self> {
        Ok(Self::new(
            CellAddress::checked(start_row, start_col)?,
            CellAddress::checked(end_row, end_col)?,
        ))
    }

    /// A single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse `A1:B10` or a single `A1`
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(':');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(Error::InvalidRange(s.to_string()));
        }

        let start = CellAddress::parse(first)?;
        Ok(match second {
            Some(end) => Self::new(start, CellAddress::parse(end)?),
            None => Self::single(start),
        })
    }

    /// Check if a cell lies inside this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        (self.start.row..=self.end.row).contains(&addr.row)
            && (self.start.col..=self.end.col).contains(&addr.col)
    }

    /// Check if two ranges share at least one cell
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && other.start.row <= self.end.row
            && self.start.col <= other.end.col
            && other.start.col <= self.end.col
    }

    /// Check if this range is a single cell
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of rows covered
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Row indices covered
    pub fn rows(&self) -> impl Iterator<Item = u32> {
        self.start.row..=self.end.row
    }

    /// Column indices covered
    pub fn cols(&self) -> impl Iterator<Item = u16> {
        self.start.col..=self.end.col
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> {
        let cols = self.start.col..=self.end.col;
        self.rows()
            .flat_map(move |row| cols.clone().map(move |col| CellAddress::new(row, col)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<CellAddress> for CellRange {
    fn from(addr: CellAddress) -> Self {
        Self::single(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(CellAddress::column_letters(0), "A");
        assert_eq!(CellAddress::column_letters(25), "Z");
        assert_eq!(CellAddress::column_letters(26), "AA");
        assert_eq!(CellAddress::column_letters(701), "ZZ");
        assert_eq!(CellAddress::column_letters(16383), "XFD");
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(CellAddress::parse("A1").unwrap(), CellAddress::new(0, 0));
        assert_eq!(CellAddress::parse("c10").unwrap(), CellAddress::new(9, 2));
        assert_eq!(CellAddress::parse("$B$2").unwrap(), CellAddress::new(1, 1));
        assert_eq!(
            CellAddress::parse("XFD1048576").unwrap(),
            CellAddress::new(1_048_575, 16_383)
        );
    }

    #[test]
    fn test_parse_address_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("A1B").is_err());
        assert!(matches!(
            CellAddress::parse("A1048577"),
            Err(Error::RowOutOfBounds(1_048_576, _))
        ));
        assert!(matches!(
            CellAddress::parse("XFE1"),
            Err(Error::ColumnOutOfBounds(16_384, _))
        ));
    }

    #[test]
    fn test_checked_bounds() {
        assert!(CellAddress::checked(MAX_ROWS - 1, MAX_COLS - 1).is_ok());
        assert!(CellAddress::checked(MAX_ROWS, 0).is_err());
        assert!(CellAddress::checked(0, MAX_COLS).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellRange::parse("B2:A1").unwrap().to_string(), "A1:B2");
        assert_eq!(CellRange::parse("D4").unwrap().to_string(), "D4");
    }

    #[test]
    fn test_range_normalises_corners() {
        let range = CellRange::from_indices(5, 3, 1, 0).unwrap();
        assert_eq!(range.start, CellAddress::new(1, 0));
        assert_eq!(range.end, CellAddress::new(5, 3));
        assert_eq!(range.row_count(), 5);
        assert_eq!(range.col_count(), 4);
    }

    #[test]
    fn test_range_parse_errors() {
        assert!(matches!(
            CellRange::parse("A1:B2:C3"),
            Err(Error::InvalidRange(_))
        ));
        assert!(CellRange::parse("A1:").is_err());
    }

    #[test]
    fn test_overlaps_and_contains() {
        let range = CellRange::parse("B2:D4").unwrap();
        assert!(range.contains(&CellAddress::new(2, 2)));
        assert!(!range.contains(&CellAddress::new(0, 0)));
        assert!(range.overlaps(&CellRange::parse("D4:F6").unwrap()));
        assert!(!range.overlaps(&CellRange::parse("E1:F6").unwrap()));
    }

    #[test]
    fn test_cells_iterate_row_by_row() {
        let cells: Vec<_> = CellRange::parse("A1:B2").unwrap().cells().collect();
        assert_eq!(
            cells,
            vec![
                CellAddress::new(0, 0),
                CellAddress::new(0, 1),
                CellAddress::new(1, 0),
                CellAddress::new(1, 1),
            ]
        );
    }
}
