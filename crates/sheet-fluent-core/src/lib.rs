//! # sheet-fluent-core
//!
//! The spreadsheet object model the fluent layer drives.
//!
//! - [`WorksheetModel`] and [`RangeModel`] - Primitive property setters an engine implements
//! - [`CellAddress`] and [`CellRange`] - Cell addressing
//! - [`RangeFormat`], [`Style`], [`Color`], borders and alignment - Formatting values
//! - [`PageSetup`] - Print layout
//! - [`MemorySheet`] - In-memory model that records every property
//!
//! ## Example
//!
//! ```rust
//! use sheet_fluent_core::{CellRange, MemorySheet, RangeModel, WorksheetModel};
//!
//! let mut sheet = MemorySheet::new("Report");
//! let range = CellRange::parse("A1:B1").unwrap();
//! sheet.range(range).write_text("Total");
//!
//! assert_eq!(sheet.text_at(0, 1), Some("Total"));
//! ```

pub mod cell;
pub mod error;
pub mod memory;
pub mod model;
pub mod page_setup;
pub mod style;

pub use cell::{CellAddress, CellRange};
pub use error::{Error, Result};
pub use memory::{MemoryCell, MemoryRange, MemorySheet};
pub use model::{RangeModel, WorksheetModel};
pub use page_setup::{Margins, Orientation, PageSetup};
pub use style::{
    Border, BorderIndex, BorderWeight, Borders, Color, Font, HorizontalAlignment, LineStyle,
    RangeFormat, Style, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
