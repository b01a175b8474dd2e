//! Error type for the fluent layer

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by fluent operations
#[derive(Debug, Error)]
pub enum Error {
    /// Object model rejected an operation
    #[error(transparent)]
    Model(#[from] sheet_fluent_core::Error),

    /// Number format could not be resolved
    #[error(transparent)]
    Format(#[from] sheet_fluent_format::CatalogError),
}
