//! Chainable worksheet operations

use sheet_fluent_core::{CellRange, Margins, Orientation, WorksheetModel, MAX_COLS};

use crate::error::Result;

/// Fluent extension methods for every [`WorksheetModel`]
///
/// ```rust
/// use sheet_fluent::prelude::*;
///
/// let mut sheet = MemorySheet::new("Report");
/// sheet
///     .set_margin_to_narrow()
///     .set_layout(true)
///     .set_col_widths(&[30.0, 12.0, 12.0])
///     .fit_cols_to_pages(1);
///
/// assert_eq!(sheet.page_setup().orientation, Orientation::Landscape);
/// assert_eq!(sheet.column_width(1), 12.0);
/// ```
pub trait WorksheetExt: WorksheetModel {
    /// Apply the "Narrow" margin preset
    fn set_margin_to_narrow(&mut self) -> &mut Self {
        self.page_setup_mut().margins = Margins::narrow();
        self
    }

    /// Landscape when `landscape` is true, portrait otherwise
    fn set_layout(&mut self, landscape: bool) -> &mut Self {
        self.page_setup_mut().orientation = Orientation::from_landscape(landscape);
        self
    }

    /// Set widths of consecutive columns starting at column A
    ///
    /// Widths past the last worksheet column are ignored.
    fn set_col_widths(&mut self, widths: &[f64]) -> &mut Self {
        for (col, width) in (0..MAX_COLS).zip(widths.iter().copied()) {
            self.set_column_width(col, width);
        }
        if widths.len() > MAX_COLS as usize {
            log::warn!(
                "Ignoring {} column widths past the last column",
                widths.len() - MAX_COLS as usize
            );
        }
        self
    }

    /// Scale printing to fit the used columns on `pages` pages
    fn fit_cols_to_pages(&mut self, pages: u32) -> &mut Self {
        self.page_setup_mut().fit_to_pages_wide = Some(pages);
        self
    }

    /// Borrow a single cell (0-based row and column)
    fn cells(&mut self, row: u32, col: u16) -> Result<Self::Range<'_>> {
        let range = CellRange::from_indices(row, col, row, col)?;
        Ok(self.range(range))
    }

    /// Borrow the block between two corners (0-based, inclusive)
    fn cells_range(
        &mut self,
        start_row: u32,
        start_col: u16,
        end_row: u32,
        end_col: u16,
    ) -> Result<Self::Range<'_>> {
        let range = CellRange::from_indices(start_row, start_col, end_row, end_col)?;
        Ok(self.range(range))
    }
}

impl<T: WorksheetModel> WorksheetExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use sheet_fluent_core::{MemorySheet, RangeModel, MAX_ROWS};

    #[test]
    fn test_page_setup_chain() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.set_margin_to_narrow().set_layout(true).fit_cols_to_pages(2);

        let setup = sheet.page_setup();
        assert_eq!(setup.margins, Margins::narrow());
        assert_eq!(setup.orientation, Orientation::Landscape);
        assert_eq!(setup.fit_to_pages_wide, Some(2));

        sheet.set_layout(false);
        assert_eq!(sheet.page_setup().orientation, Orientation::Portrait);
    }

    #[test]
    fn test_col_widths_start_at_first_column() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.set_col_widths(&[10.0, 20.0, 5.0]);

        assert_eq!(sheet.custom_column_widths().len(), 3);
        assert_eq!(sheet.column_width(0), 10.0);
        assert_eq!(sheet.column_width(2), 5.0);
    }

    #[test]
    fn test_cells_address() {
        let mut sheet = MemorySheet::new("Sheet1");
        assert_eq!(sheet.cells(2, 1).unwrap().address().to_string(), "B3");
        assert_eq!(
            sheet.cells_range(3, 3, 0, 0).unwrap().address().to_string(),
            "A1:D4"
        );
    }

    #[test]
    fn test_cells_out_of_bounds() {
        let mut sheet = MemorySheet::new("Sheet1");
        assert!(matches!(
            sheet.cells(MAX_ROWS, 0),
            Err(Error::Model(sheet_fluent_core::Error::RowOutOfBounds(_, _)))
        ));
        assert!(sheet.cells_range(0, 0, 0, MAX_COLS).is_err());
    }
}
