//! Catalog plus inference rules, as consumed by styling code

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::catalog::FormatCatalog;
use crate::category::FormatCategory;
use crate::error::Result;
use crate::inference::{FormatInference, InputValue};

static SHARED: OnceCell<FormatPolicy> = OnceCell::new();

/// A format catalog paired with the rules used to auto-detect categories
#[derive(Debug, Clone)]
pub struct FormatPolicy {
    catalog: Arc<FormatCatalog>,
    inference: FormatInference,
}

impl FormatPolicy {
    /// Create a policy over a catalog with the default inference rules
    pub fn new(catalog: impl Into<Arc<FormatCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            inference: FormatInference::default(),
        }
    }

    /// Policy over the shared catalog with the default inference rules
    pub fn shared() -> Result<&'static FormatPolicy> {
        SHARED.get_or_try_init(|| Ok(Self::new(Arc::clone(FormatCatalog::shared_arc()?))))
    }

    /// Replace the inference rules
    pub fn with_inference(mut self, inference: FormatInference) -> Self {
        self.inference = inference;
        self
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// The inference rules
    pub fn inference(&self) -> &FormatInference {
        &self.inference
    }

    /// Pattern for a category
    pub fn resolve(&self, category: FormatCategory) -> Result<&str> {
        self.catalog.resolve(category)
    }

    /// Category for a value, if the rules pick one
    pub fn infer(&self, value: &InputValue) -> Option<FormatCategory> {
        self.inference.infer(value)
    }

    /// Infer a category for `value` and resolve it
    ///
    /// `Ok(None)` means the rules chose to leave the target's format alone.
    pub fn pattern_for_value(&self, value: &InputValue) -> Result<Option<&str>> {
        self.infer(value)
            .map(|category| self.resolve(category))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::inference::{NumericPolicy, UnclassifiedPolicy};
    use chrono::NaiveDate;

    #[test]
    fn test_pattern_for_date() {
        let policy = FormatPolicy::shared().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            policy.pattern_for_value(&date.into()).unwrap(),
            Some("dd/mm/yyyy")
        );
    }

    #[test]
    fn test_pattern_for_number_with_number_policy() {
        let policy = FormatPolicy::shared()
            .unwrap()
            .clone()
            .with_inference(FormatInference::new().numeric(NumericPolicy::Number));
        assert_eq!(
            policy.pattern_for_value(&InputValue::from(10.0_f64)).unwrap(),
            Some("# ##0.00;[Red]-# ##0.00")
        );
    }

    #[test]
    fn test_pattern_for_text() {
        let policy = FormatPolicy::shared().unwrap();
        assert_eq!(
            policy.pattern_for_value(&InputValue::from("hello")).unwrap(),
            Some("")
        );

        let strict = policy.clone().with_inference(
            FormatInference::new().unclassified(UnclassifiedPolicy::NoFormat),
        );
        assert_eq!(strict.pattern_for_value(&InputValue::from("hello")).unwrap(), None);
    }

    #[test]
    fn test_shared_policy_uses_shared_catalog() {
        let policy = FormatPolicy::shared().unwrap();
        assert!(Arc::ptr_eq(&policy.catalog, FormatCatalog::shared_arc().unwrap()));
        assert!(std::ptr::eq(policy.catalog(), FormatCatalog::shared().unwrap()));
    }

    #[test]
    fn test_missing_pattern_is_surfaced() {
        let catalog = FormatCatalog::from_entries([(FormatCategory::General, "")]);
        let policy = FormatPolicy::new(catalog);
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let err = policy.pattern_for_value(&date.into()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingPattern(FormatCategory::ShortDate)));
    }
}
