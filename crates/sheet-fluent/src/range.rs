//! Chainable range operations

use sheet_fluent_core::{
    Border, BorderIndex, BorderWeight, Color, HorizontalAlignment, LineStyle, RangeModel, Style,
    VerticalAlignment,
};
use sheet_fluent_format::{FormatCategory, FormatPolicy, InputValue};

use crate::error::Result;

/// Fluent extension methods for every [`RangeModel`]
///
/// Operations that resolve number formats or touch merged regions can fail
/// and return `Result<&mut Self>`; the rest return `&mut Self` directly.
///
/// ```rust
/// use sheet_fluent::prelude::*;
///
/// let mut sheet = MemorySheet::new("Report");
/// sheet
///     .cells_range(0, 0, 0, 3)?
///     .merge(true)?
///     .set_value("Quarterly totals", false)?
///     .set_bold(true)
///     .set_alignment(VerticalAlignment::Center, HorizontalAlignment::Center);
///
/// sheet.cells(1, 0)?.set_value(1250.5, true)?;
///
/// assert_eq!(sheet.number_format_at(0, 0), Some("@"));
/// assert_eq!(sheet.merged_regions().len(), 1);
/// # Ok::<(), sheet_fluent::Error>(())
/// ```
pub trait RangeExt: RangeModel {
    /// Toggle an autofilter on this range
    fn toggle_auto_filter(&mut self) -> &mut Self {
        self.auto_filter();
        self
    }

    /// Write a value using the shared format policy
    ///
    /// See [`RangeExt::set_value_with`].
    fn set_value<V: Into<InputValue>>(
        &mut self,
        value: V,
        auto_number_format: bool,
    ) -> Result<&mut Self> {
        let policy = FormatPolicy::shared()?;
        self.set_value_with(policy, value, auto_number_format)
    }

    /// Write a value and set its number format
    ///
    /// Empty values leave the range untouched. Without `auto_number_format`
    /// the range is formatted as [`FormatCategory::Text`]; with it, the
    /// policy infers a category from the value. A policy that infers nothing
    /// leaves the current number format in place.
    fn set_value_with<V: Into<InputValue>>(
        &mut self,
        policy: &FormatPolicy,
        value: V,
        auto_number_format: bool,
    ) -> Result<&mut Self> {
        let value = value.into();
        if value.is_empty() {
            return Ok(self);
        }

        let pattern = if auto_number_format {
            policy.pattern_for_value(&value)?
        } else {
            Some(policy.resolve(FormatCategory::Text)?)
        };

        self.write_text(&value.display_text());
        if let Some(pattern) = pattern {
            self.write_number_format(pattern);
        }
        Ok(self)
    }

    /// Apply a number format category from the shared catalog
    fn set_number_format(&mut self, category: FormatCategory) -> Result<&mut Self> {
        let policy = FormatPolicy::shared()?;
        self.set_number_format_with(policy, category)
    }

    /// Apply a number format category from a specific policy's catalog
    fn set_number_format_with(
        &mut self,
        policy: &FormatPolicy,
        category: FormatCategory,
    ) -> Result<&mut Self> {
        let pattern = policy.resolve(category)?;
        self.write_number_format(pattern);
        Ok(self)
    }

    /// Merge the range when `merge` is true, unmerge it otherwise
    fn merge(&mut self, merge: bool) -> Result<&mut Self> {
        if merge {
            self.merge_cells()?;
        } else {
            self.unmerge_cells();
        }
        Ok(self)
    }

    /// Set vertical and horizontal alignment
    fn set_alignment(
        &mut self,
        vertical: VerticalAlignment,
        horizontal: HorizontalAlignment,
    ) -> &mut Self {
        self.update_format(|format| {
            format.vertical = vertical;
            format.horizontal = horizontal;
            format.include_alignment = true;
        });
        self
    }

    /// Set the width of the columns this range covers
    fn set_width(&mut self, width: f64) -> &mut Self {
        self.set_column_width(width);
        self
    }

    /// Set the height of the rows this range covers
    fn set_height(&mut self, height: f64) -> &mut Self {
        self.set_row_height(height);
        self
    }

    /// Turn on text wrapping
    fn set_wrap_text(&mut self) -> &mut Self {
        self.update_format(|format| format.wrap_text = true);
        self
    }

    /// Set the font size in points
    fn set_font_size(&mut self, size: f64) -> &mut Self {
        self.update_format(|format| format.font.size = size);
        self
    }

    /// Set or clear bold
    fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.update_format(|format| format.font.bold = bold);
        self
    }

    /// Apply a named style
    fn apply_style(&mut self, style: &Style) -> &mut Self {
        self.set_style(style);
        self
    }

    /// Set the border on one edge
    fn set_border(
        &mut self,
        index: BorderIndex,
        line: LineStyle,
        weight: BorderWeight,
        color: Color,
    ) -> &mut Self {
        let border = Border::new(line, weight, color);
        self.update_format(|format| {
            format.borders.set(index, border);
            format.include_border = true;
        });
        self
    }

    /// Set the border on every outer and inside edge
    fn set_borders(&mut self, line: LineStyle, weight: BorderWeight, color: Color) -> &mut Self {
        let border = Border::new(line, weight, color);
        self.update_format(|format| {
            format.borders.set_grid(border);
            format.include_border = true;
        });
        self
    }
}

impl<T: RangeModel> RangeExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet::WorksheetExt;
    use crate::Error;
    use sheet_fluent_core::MemorySheet;
    use sheet_fluent_format::{CatalogError, FormatCatalog, FormatInference, UnclassifiedPolicy};

    #[test]
    fn test_set_value_without_auto_format_uses_text() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.cells(0, 0).unwrap().set_value(42.5, false).unwrap();

        assert_eq!(sheet.text_at(0, 0), Some("42.5"));
        assert_eq!(sheet.number_format_at(0, 0), Some("@"));
    }

    #[test]
    fn test_auto_format_integers_and_singles_use_general() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.cells(0, 0).unwrap().set_value(42_i32, true).unwrap();
        sheet.cells(0, 1).unwrap().set_value(2.5_f32, true).unwrap();
        sheet.cells(0, 2).unwrap().set_value(7_i64, true).unwrap();

        assert_eq!(sheet.text_at(0, 0), Some("42"));
        assert_eq!(sheet.number_format_at(0, 0), Some(""));
        assert_eq!(sheet.text_at(0, 1), Some("2.5"));
        assert_eq!(sheet.number_format_at(0, 1), Some(""));
        assert_eq!(sheet.number_format_at(0, 2), Some(""));
    }

    #[test]
    fn test_set_value_empty_is_noop() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.cells(0, 0).unwrap().set_value(None::<f64>, true).unwrap();
        sheet.cells(0, 1).unwrap().set_value((), false).unwrap();

        assert_eq!(sheet.cell_count(), 0);
    }

    #[test]
    fn test_no_format_policy_keeps_existing_pattern() {
        let policy = FormatPolicy::shared()
            .unwrap()
            .clone()
            .with_inference(FormatInference::new().unclassified(UnclassifiedPolicy::NoFormat));

        let mut sheet = MemorySheet::new("Sheet1");
        sheet
            .cells(0, 0)
            .unwrap()
            .set_number_format(FormatCategory::Currency)
            .unwrap()
            .set_value_with(&policy, "n/a", true)
            .unwrap();

        assert_eq!(sheet.text_at(0, 0), Some("n/a"));
        assert_eq!(
            sheet.number_format_at(0, 0),
            Some("R ### ### ##0.00;[Red]R -### ### ##0.00")
        );
    }

    #[test]
    fn test_missing_pattern_leaves_cell_untouched() {
        let catalog = FormatCatalog::from_entries([(FormatCategory::General, "")]);
        let policy = FormatPolicy::new(catalog);

        let mut sheet = MemorySheet::new("Sheet1");
        let err = sheet
            .cells(0, 0)
            .unwrap()
            .set_value_with(&policy, "hello", false)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Format(CatalogError::MissingPattern(FormatCategory::Text))
        ));
        assert_eq!(sheet.cell_count(), 0);
    }

    #[test]
    fn test_merge_false_unmerges() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.cells_range(0, 0, 1, 1).unwrap().merge(true).unwrap();
        assert_eq!(sheet.merged_regions().len(), 1);

        sheet.cells(0, 0).unwrap().merge(false).unwrap();
        assert!(sheet.merged_regions().is_empty());
    }

    #[test]
    fn test_single_border_edge() {
        let mut sheet = MemorySheet::new("Sheet1");
        sheet.cells(0, 0).unwrap().set_border(
            BorderIndex::Bottom,
            LineStyle::Double,
            BorderWeight::Thick,
            Color::BLUE,
        );

        let format = &sheet.cell_at(0, 0).unwrap().format;
        assert!(format.include_border);
        assert_eq!(
            format.borders.get(BorderIndex::Bottom),
            Some(&Border::new(LineStyle::Double, BorderWeight::Thick, Color::BLUE))
        );
        assert_eq!(format.borders.get(BorderIndex::Top), None);
    }
}
