//! Object model traits
//!
//! A spreadsheet engine exposes its worksheets and ranges through these
//! traits. Each method sets one property on the engine's object; the fluent
//! layer builds chainable operations on top of them.

use crate::cell::CellRange;
use crate::error::Result;
use crate::page_setup::PageSetup;
use crate::style::{RangeFormat, Style};

/// A worksheet in an engine's object model
pub trait WorksheetModel {
    /// Handle to a range of this worksheet
    type Range<'a>: RangeModel
    where
        Self: 'a;

    /// Page setup of the worksheet
    fn page_setup_mut(&mut self) -> &mut PageSetup;

    /// Set the width of one column, in characters
    fn set_column_width(&mut self, col: u16, width: f64);

    /// Borrow a range of the worksheet
    fn range(&mut self, range: CellRange) -> Self::Range<'_>;
}

/// A range of cells in an engine's object model
pub trait RangeModel {
    /// The cells this handle covers
    fn address(&self) -> CellRange;

    /// Write a value to every cell
    fn write_text(&mut self, text: &str);

    /// Set the number format pattern of every cell
    fn write_number_format(&mut self, pattern: &str);

    /// Merge the range into one cell
    ///
    /// Fails if the range partially overlaps an existing merged region.
    fn merge_cells(&mut self) -> Result<()>;

    /// Split every merged region touching the range
    fn unmerge_cells(&mut self);

    /// Toggle an autofilter on the range
    fn auto_filter(&mut self);

    /// Set the width of every column the range covers
    fn set_column_width(&mut self, width: f64);

    /// Set the height of every row the range covers, in points
    fn set_row_height(&mut self, height: f64);

    /// Modify the format of every cell
    fn update_format(&mut self, update: impl FnMut(&mut RangeFormat));

    /// Apply a named style
    fn set_style(&mut self, style: &Style);
}
