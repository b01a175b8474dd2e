//! Formatting values applied to ranges
//!
//! - [`RangeFormat`] - Everything a range carries besides its value and number format
//! - [`Style`] - A named, reusable [`RangeFormat`]
//! - [`Font`], [`Borders`], [`Color`] and alignment enums

mod alignment;
mod border;
mod color;
mod font;

pub use alignment::{HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderIndex, BorderWeight, Borders, LineStyle};
pub use color::Color;
pub use font::Font;

/// Visual formatting of a range
///
/// The `include_*` flags mark which parts take effect over the range's
/// named style, mirroring how spreadsheet engines scope style inheritance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeFormat {
    /// Font settings
    pub font: Font,
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment
    pub vertical: VerticalAlignment,
    /// Wrap text
    pub wrap_text: bool,
    /// Border edges
    pub borders: Borders,
    /// Alignment overrides the named style
    pub include_alignment: bool,
    /// Borders override the named style
    pub include_border: bool,
}

/// A named format that can be applied to many ranges
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Style name (e.g., "Heading 1")
    pub name: String,
    /// Formatting the style applies
    pub format: RangeFormat,
    /// Number format pattern the style applies, if any
    pub number_format: Option<String>,
}

impl Style {
    /// Create a style with default formatting
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            format: RangeFormat::default(),
            number_format: None,
        }
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.format.font.bold = bold;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.format.font.size = size;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.format.font.color = color;
        self
    }

    /// Set alignment
    pub fn alignment(
        mut self,
        vertical: VerticalAlignment,
        horizontal: HorizontalAlignment,
    ) -> Self {
        self.format.vertical = vertical;
        self.format.horizontal = horizontal;
        self.format.include_alignment = true;
        self
    }

    /// Set a border on every outer and inside edge
    pub fn borders(mut self, border: Border) -> Self {
        self.format.borders.set_grid(border);
        self.format.include_border = true;
        self
    }

    /// Set the number format pattern
    pub fn number_format<S: Into<String>>(mut self, pattern: S) -> Self {
        self.number_format = Some(pattern.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::new("Header")
            .bold(true)
            .font_size(14.0)
            .alignment(VerticalAlignment::Center, HorizontalAlignment::Center)
            .number_format("@");

        assert_eq!(style.name, "Header");
        assert!(style.format.font.bold);
        assert_eq!(style.format.font.size, 14.0);
        assert!(style.format.include_alignment);
        assert!(!style.format.include_border);
        assert_eq!(style.number_format.as_deref(), Some("@"));
    }

    #[test]
    fn test_style_borders_sets_include_flag() {
        let style = Style::new("Boxed").borders(Border::thin());
        assert!(style.format.include_border);
        assert_eq!(
            style.format.borders.get(BorderIndex::Left),
            Some(&Border::thin())
        );
    }
}
