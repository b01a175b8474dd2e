//! Category to pattern-string catalog
//!
//! Pattern strings are locale data, so catalogs are loaded from JSON
//! documents and checked against [`FormatCategory::ALL`] when built:
//!
//! ```json
//! { "locale": "en-ZA", "patterns": { "General": "", "ShortDate": "dd/mm/yyyy" } }
//! ```
//!
//! The default locale ships with the crate and backs [`FormatCatalog::shared`].

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::category::FormatCategory;
use crate::error::{CatalogError, Result};

/// Embedded default catalog document
pub const BUILTIN_CATALOG: &str = include_str!("../data/en-ZA.json");

static SHARED: OnceCell<Arc<FormatCatalog>> = OnceCell::new();

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    locale: Option<String>,
    patterns: BTreeMap<String, String>,
}

/// Immutable mapping from [`FormatCategory`] to a display pattern
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatCatalog {
    locale: Option<String>,
    patterns: AHashMap<FormatCategory, String>,
}

impl FormatCatalog {
    /// Build a catalog without checking it covers every category
    ///
    /// Later entries win over earlier ones for the same category.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (FormatCategory, S)>,
        S: Into<String>,
    {
        Self {
            locale: None,
            patterns: entries
                .into_iter()
                .map(|(category, pattern)| (category, pattern.into()))
                .collect(),
        }
    }

    /// Build a catalog and fail if any category is missing
    pub fn validated<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FormatCategory, S)>,
        S: Into<String>,
    {
        let catalog = Self::from_entries(entries);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Return a copy with the pattern for `category` replaced
    pub fn with_override<S: Into<String>>(&self, category: FormatCategory, pattern: S) -> Self {
        let mut catalog = self.clone();
        catalog.patterns.insert(category, pattern.into());
        catalog
    }

    /// Parse and validate a catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: None,
                source,
            })?;
        Self::from_document(document)
    }

    /// Parse and validate a catalog document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Parse {
                origin: None,
                source,
            })?;
        Self::from_document(document)
    }

    /// Load and validate a catalog document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CatalogDocument =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                origin: Some(path.to_path_buf()),
                source,
            })?;

        let catalog = Self::from_document(document)?;
        log::debug!(
            "Loaded format catalog from {} ({} patterns, locale {:?})",
            path.display(),
            catalog.len(),
            catalog.locale
        );
        Ok(catalog)
    }

    /// Parse the embedded default catalog
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// The process-wide catalog, built from [`BUILTIN_CATALOG`] on first use
    pub fn shared() -> Result<&'static FormatCatalog> {
        Self::shared_arc().map(Arc::as_ref)
    }

    /// Handle to the process-wide catalog
    pub(crate) fn shared_arc() -> Result<&'static Arc<FormatCatalog>> {
        SHARED.get_or_try_init(|| {
            let catalog = Self::builtin()?;
            log::debug!(
                "Initialised shared format catalog (locale {:?})",
                catalog.locale
            );
            Ok(Arc::new(catalog))
        })
    }

    fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut patterns = AHashMap::with_capacity(document.patterns.len());
        for (name, pattern) in document.patterns {
            let category: FormatCategory = name.parse()?;
            patterns.insert(category, pattern);
        }

        let catalog = Self {
            locale: document.locale,
            patterns,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every category has a pattern
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            return Ok(());
        }
        log::warn!(
            "Format catalog {:?} is missing {} of {} categories",
            self.locale,
            missing.len(),
            FormatCategory::ALL.len()
        );
        Err(CatalogError::Incomplete { missing })
    }

    /// Categories with no pattern, in declaration order
    pub fn missing(&self) -> Vec<FormatCategory> {
        FormatCategory::ALL
            .into_iter()
            .filter(|category| !self.patterns.contains_key(category))
            .collect()
    }

    /// Look up the pattern for a category
    pub fn resolve(&self, category: FormatCategory) -> Result<&str> {
        self.patterns
            .get(&category)
            .map(String::as_str)
            .ok_or(CatalogError::MissingPattern(category))
    }

    /// Locale tag, if the catalog carries one
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Check if a category has a pattern
    pub fn contains(&self, category: FormatCategory) -> bool {
        self.patterns.contains_key(&category)
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if no pattern is registered
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Registered patterns, in category declaration order
    pub fn iter(&self) -> impl Iterator<Item = (FormatCategory, &str)> + '_ {
        FormatCategory::ALL.into_iter().filter_map(move |category| {
            self.patterns
                .get(&category)
                .map(|pattern| (category, pattern.as_str()))
        })
    }
}
