//! Prelude module - common imports for sheet-fluent users
//!
//! ```rust
//! use sheet_fluent::prelude::*;
//! ```

pub use crate::{
    // Style types
    Border,
    BorderIndex,
    BorderWeight,
    CellRange,
    Color,
    // Error types
    Error,
    // Format types
    FormatCatalog,
    FormatCategory,
    FormatPolicy,
    HorizontalAlignment,
    InputValue,
    LineStyle,
    // Object model
    MemorySheet,
    Orientation,
    // Extension traits
    RangeExt,
    RangeModel,
    Result,
    Style,
    VerticalAlignment,
    WorksheetExt,
    WorksheetModel,
};
