//! # sheet-fluent
//!
//! Chainable styling for spreadsheet worksheets and ranges.
//!
//! Every operation sets one or more properties on a worksheet or range and
//! hands the same object back, so page setup, values, number formats,
//! alignment and borders read as one expression. Number formats are named by
//! [`FormatCategory`] and resolved through a locale catalog; values written
//! with auto-formatting get a category inferred from their type.
//!
//! The object model is abstract: anything implementing
//! [`WorksheetModel`]/[`RangeModel`] can be driven. [`MemorySheet`] records
//! the resulting state.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sheet_fluent::prelude::*;
//!
//! let mut sheet = MemorySheet::new("Invoice");
//! sheet.set_margin_to_narrow().set_layout(false).set_col_widths(&[14.0, 40.0]);
//!
//! sheet
//!     .cells(0, 0)?
//!     .set_value(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), true)?
//!     .set_bold(true);
//! sheet
//!     .cells(1, 1)?
//!     .set_value(1999.99, false)?
//!     .set_number_format(FormatCategory::Currency)?;
//!
//! assert_eq!(sheet.text_at(0, 0), Some("2024-01-15"));
//! assert_eq!(sheet.number_format_at(0, 0), Some("dd/mm/yyyy"));
//! # Ok::<(), sheet_fluent::Error>(())
//! ```

pub mod error;
pub mod prelude;
pub mod range;
pub mod worksheet;

pub use error::{Error, Result};
pub use range::RangeExt;
pub use worksheet::WorksheetExt;

// Re-export object model types
pub use sheet_fluent_core::{
    Border, BorderIndex, BorderWeight, Borders, CellAddress, CellRange, Color, Font,
    HorizontalAlignment, LineStyle, Margins, MemoryCell, MemoryRange, MemorySheet, Orientation,
    PageSetup, RangeFormat, RangeModel, Style, VerticalAlignment, WorksheetModel, MAX_COLS,
    MAX_ROWS,
};

// Re-export format policy types
pub use sheet_fluent_format::{
    infer, CatalogError, FormatCatalog, FormatCategory, FormatInference, FormatPolicy,
    InferencePolicy, InputValue, NumericPolicy, UnclassifiedPolicy,
};
