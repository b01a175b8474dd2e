//! Best-effort format inference from a value's shape
//!
//! Callers describe a value with [`InputValue`] while its concrete type is
//! still known, and [`FormatInference`] maps it to a [`FormatCategory`].
//! Only dates and numbers are recognised; everything else falls through to
//! the unclassified policy.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::category::FormatCategory;

/// A value handed to a cell-writing operation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputValue {
    /// Calendar date or date-time
    Temporal(NaiveDateTime),
    /// Nullable floating-point number
    NumericOptional(Option<f64>),
    /// Text
    Textual(String),
    /// No value
    #[default]
    Empty,
    /// Anything else, carried as its display text
    Other(String),
}

impl InputValue {
    /// Shorthand for a text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        InputValue::Textual(s.into())
    }

    /// Check if there is nothing to write
    ///
    /// A numeric value with no number counts as empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, InputValue::Empty | InputValue::NumericOptional(None))
    }

    /// Text written into the cell for this value
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Temporal(dt) if dt.time() == NaiveTime::MIN => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            InputValue::Temporal(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            InputValue::NumericOptional(Some(n)) => write!(f, "{}", n),
            InputValue::NumericOptional(None) | InputValue::Empty => Ok(()),
            InputValue::Textual(s) | InputValue::Other(s) => f.write_str(s),
        }
    }
}

impl From<NaiveDateTime> for InputValue {
    fn from(dt: NaiveDateTime) -> Self {
        InputValue::Temporal(dt)
    }
}

impl From<NaiveDate> for InputValue {
    fn from(date: NaiveDate) -> Self {
        InputValue::Temporal(date.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for InputValue {
    fn from(dt: DateTime<Tz>) -> Self {
        InputValue::Temporal(dt.naive_local())
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::NumericOptional(Some(n))
    }
}

// Only nullable doubles take part in numeric inference; other numeric types
// classify like any unrecognised value.
impl From<f32> for InputValue {
    fn from(n: f32) -> Self {
        InputValue::Other(n.to_string())
    }
}

impl From<i32> for InputValue {
    fn from(n: i32) -> Self {
        InputValue::Other(n.to_string())
    }
}

impl From<i64> for InputValue {
    fn from(n: i64) -> Self {
        InputValue::Other(n.to_string())
    }
}

impl From<Option<f64>> for InputValue {
    fn from(n: Option<f64>) -> Self {
        match n {
            Some(n) => InputValue::NumericOptional(Some(n)),
            None => InputValue::Empty,
        }
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Textual(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Textual(s)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        InputValue::Other(if b { "TRUE" } else { "FALSE" }.to_string())
    }
}

impl From<()> for InputValue {
    fn from(_: ()) -> Self {
        InputValue::Empty
    }
}

/// Coarse shape of an [`InputValue`], the input to the inference rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// Calendar date or time
    Temporal,
    /// A present nullable number
    NumericOptional,
    /// Text, empty values and everything else
    Other,
}

/// What to infer for present numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericPolicy {
    /// Format numbers as [`FormatCategory::ShortDate`]
    ///
    /// Matches what existing auto-formatted sheets contain.
    #[default]
    LegacyShortDate,
    /// Format numbers as [`FormatCategory::Number`]
    Number,
}

/// What to infer for values no rule recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedPolicy {
    /// Infer [`FormatCategory::General`]
    #[default]
    General,
    /// Infer nothing; the target keeps its current format
    NoFormat,
}

/// Tunable inference rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InferencePolicy {
    /// Rule for present numeric values
    pub numeric: NumericPolicy,
    /// Rule for unrecognised values
    pub unclassified: UnclassifiedPolicy,
}

/// Classifier from [`InputValue`] to [`FormatCategory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatInference {
    policy: InferencePolicy,
}

impl FormatInference {
    /// Create a classifier with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a specific policy
    pub fn with_policy(policy: InferencePolicy) -> Self {
        Self { policy }
    }

    /// Set the rule for present numeric values
    pub fn numeric(mut self, numeric: NumericPolicy) -> Self {
        self.policy.numeric = numeric;
        self
    }

    /// Set the rule for unrecognised values
    pub fn unclassified(mut self, unclassified: UnclassifiedPolicy) -> Self {
        self.policy.unclassified = unclassified;
        self
    }

    /// The active policy
    pub fn policy(&self) -> InferencePolicy {
        self.policy
    }

    /// Determine the shape of a value
    pub fn classify(&self, value: &InputValue) -> ValueShape {
        match value {
            InputValue::Temporal(_) => ValueShape::Temporal,
            InputValue::NumericOptional(Some(_)) => ValueShape::NumericOptional,
            InputValue::NumericOptional(None)
            | InputValue::Textual(_)
            | InputValue::Empty
            | InputValue::Other(_) => ValueShape::Other,
        }
    }

    /// Infer a format category, or `None` when the target should be left alone
    pub fn infer(&self, value: &InputValue) -> Option<FormatCategory> {
        let shape = self.classify(value);
        let category = match shape {
            ValueShape::Temporal => Some(FormatCategory::ShortDate),
            ValueShape::NumericOptional => Some(match self.policy.numeric {
                NumericPolicy::LegacyShortDate => FormatCategory::ShortDate,
                NumericPolicy::Number => FormatCategory::Number,
            }),
            ValueShape::Other => match self.policy.unclassified {
                UnclassifiedPolicy::General => Some(FormatCategory::General),
                UnclassifiedPolicy::NoFormat => None,
            },
        };
        log::trace!("Inferred {:?} for {:?} value", category, shape);
        category
    }
}

/// Infer a category with the default policy
///
/// Always yields a category: unrecognised values map to
/// [`FormatCategory::General`].
pub fn infer(value: &InputValue) -> FormatCategory {
    FormatInference::default()
        .infer(value)
        .unwrap_or(FormatCategory::General)
}
