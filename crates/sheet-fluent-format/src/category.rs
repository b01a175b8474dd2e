//! Format category enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Semantic kind of cell content, decoupled from its display mask
///
/// The set is closed: catalogs are validated against [`FormatCategory::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormatCategory {
    /// No distinguishing mask
    General,
    /// Two decimals with a thousands separator, negatives in red
    Number,
    /// Currency-prefixed amount
    Currency,
    /// Accounting-style currency amount
    Accounting,
    /// Day/month/year date
    ShortDate,
    /// Date with the month spelled out
    LongDate,
    /// Time of day
    Time,
    /// Percentage with two decimals
    Percentage,
    /// Percentage without decimals
    PercentageTruncated,
    /// Fraction
    Fraction,
    /// Scientific notation
    Scientific,
    /// Literal text
    Text,
    /// Whole number suffixed with "Days"
    Days,
    /// Whole number suffixed with "Months"
    Months,
    /// Whole number with a thousands separator
    ShortNumber,
    /// Digits only, no padding
    Clean,
}

impl FormatCategory {
    /// Every category, in declaration order
    pub const ALL: [FormatCategory; 16] = [
        FormatCategory::General,
        FormatCategory::Number,
        FormatCategory::Currency,
        FormatCategory::Accounting,
        FormatCategory::ShortDate,
        FormatCategory::LongDate,
        FormatCategory::Time,
        FormatCategory::Percentage,
        FormatCategory::PercentageTruncated,
        FormatCategory::Fraction,
        FormatCategory::Scientific,
        FormatCategory::Text,
        FormatCategory::Days,
        FormatCategory::Months,
        FormatCategory::ShortNumber,
        FormatCategory::Clean,
    ];

    /// Stable name used in catalog documents and on the command line
    pub fn name(self) -> &'static str {
        match self {
            FormatCategory::General => "General",
            FormatCategory::Number => "Number",
            FormatCategory::Currency => "Currency",
            FormatCategory::Accounting => "Accounting",
            FormatCategory::ShortDate => "ShortDate",
            FormatCategory::LongDate => "LongDate",
            FormatCategory::Time => "Time",
            FormatCategory::Percentage => "Percentage",
            FormatCategory::PercentageTruncated => "PercentageTruncated",
            FormatCategory::Fraction => "Fraction",
            FormatCategory::Scientific => "Scientific",
            FormatCategory::Text => "Text",
            FormatCategory::Days => "Days",
            FormatCategory::Months => "Months",
            FormatCategory::ShortNumber => "ShortNumber",
            FormatCategory::Clean => "Clean",
        }
    }

    /// Check if values of this category are calendar dates or times
    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            FormatCategory::ShortDate | FormatCategory::LongDate | FormatCategory::Time
        )
    }
}

impl fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatCategory {
    type Err = CatalogError;

    /// Parse a category name, ignoring case, `_` and `-`
    ///
    /// `"ShortDate"`, `"short_date"` and `"short-date"` all name the same category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        FormatCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_unique() {
        let mut seen = FormatCategory::ALL.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), FormatCategory::ALL.len());
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for category in FormatCategory::ALL {
            assert_eq!(category.name().parse::<FormatCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!(
            "short_date".parse::<FormatCategory>().unwrap(),
            FormatCategory::ShortDate
        );
        assert_eq!(
            "percentage-truncated".parse::<FormatCategory>().unwrap(),
            FormatCategory::PercentageTruncated
        );
        assert_eq!(
            "  CURRENCY ".parse::<FormatCategory>().unwrap(),
            FormatCategory::Currency
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Hexadecimal".parse::<FormatCategory>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref name) if name == "Hexadecimal"));
    }

    #[test]
    fn test_temporal_categories() {
        assert!(FormatCategory::ShortDate.is_temporal());
        assert!(FormatCategory::Time.is_temporal());
        assert!(!FormatCategory::Days.is_temporal());
    }
}
