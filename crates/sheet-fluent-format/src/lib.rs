//! # sheet-fluent-format
//!
//! Number-format policy for the sheet-fluent styling layer.
//!
//! - [`FormatCategory`] - Closed set of semantic format kinds
//! - [`FormatCatalog`] - Category to pattern-string mapping, loaded from locale data
//! - [`FormatInference`] - Best-effort category detection from an [`InputValue`]
//! - [`FormatPolicy`] - A catalog and inference rules used together
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sheet_fluent_format::{infer, FormatCatalog, FormatCategory, InputValue};
//!
//! let catalog = FormatCatalog::shared().unwrap();
//! assert_eq!(catalog.resolve(FormatCategory::ShortDate).unwrap(), "dd/mm/yyyy");
//!
//! let value = InputValue::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! assert_eq!(infer(&value), FormatCategory::ShortDate);
//! ```

pub mod catalog;
pub mod category;
pub mod error;
pub mod inference;
pub mod policy;

pub use catalog::{FormatCatalog, BUILTIN_CATALOG};
pub use category::FormatCategory;
pub use error::{CatalogError, Result};
pub use inference::{
    infer, FormatInference, InferencePolicy, InputValue, NumericPolicy, UnclassifiedPolicy,
    ValueShape,
};
pub use policy::FormatPolicy;
