//! Error types for sheet-fluent-format

use std::path::PathBuf;

use thiserror::Error;

use crate::category::FormatCategory;

/// Result type alias using [`CatalogError`]
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while building or querying a format catalog
///
/// `MissingPattern` and `Incomplete` mean the category enumeration and the
/// catalog data have drifted apart. They are configuration defects and must
/// be surfaced, never replaced by a default pattern.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A lookup hit a category with no registered pattern
    #[error("no pattern registered for category {0}")]
    MissingPattern(FormatCategory),

    /// A catalog failed validation
    #[error("catalog is missing patterns for: {}", format_categories(.missing))]
    Incomplete {
        /// Every missing category, in declaration order
        missing: Vec<FormatCategory>,
    },

    /// A catalog document named a category that does not exist
    #[error("unknown format category: {0}")]
    UnknownCategory(String),

    /// A catalog document could not be parsed
    #[error("invalid catalog document{}: {source}", describe_origin(.origin))]
    Parse {
        /// File the document came from, if any
        origin: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog file could not be read
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Check if this error signals a catalog/enumeration mismatch
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingPattern(_) | CatalogError::Incomplete { .. }
        )
    }
}

fn format_categories(categories: &[FormatCategory]) -> String {
    categories
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_origin(origin: &Option<PathBuf>) -> String {
    match origin {
        Some(path) => format!(" {}", path.display()),
        None => String::new(),
    }
}
