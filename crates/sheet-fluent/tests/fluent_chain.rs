//! End-to-end tests for chained worksheet and range styling

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheet_fluent::prelude::*;
use sheet_fluent::{FormatInference, Margins, NumericPolicy};

/// Build a small report the way a caller would
#[test]
fn test_report_chain() {
    let mut sheet = MemorySheet::new("Statement");
    sheet
        .set_margin_to_narrow()
        .set_layout(true)
        .set_col_widths(&[12.0, 36.0, 14.0])
        .fit_cols_to_pages(1);

    sheet
        .cells_range(0, 0, 0, 2)
        .unwrap()
        .merge(true)
        .unwrap()
        .set_value("Account statement", false)
        .unwrap()
        .set_bold(true)
        .set_font_size(14.0)
        .set_alignment(VerticalAlignment::Center, HorizontalAlignment::Center)
        .set_height(24.0);

    sheet
        .cells(1, 0)
        .unwrap()
        .set_value(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), true)
        .unwrap();
    sheet
        .cells(1, 1)
        .unwrap()
        .set_value("Closing balance", true)
        .unwrap()
        .set_wrap_text();
    sheet
        .cells(1, 2)
        .unwrap()
        .set_value(15250.75, false)
        .unwrap()
        .set_number_format(FormatCategory::Currency)
        .unwrap()
        .set_borders(LineStyle::Continuous, BorderWeight::Thin, Color::BLACK);

    sheet.cells_range(0, 0, 1, 2).unwrap().toggle_auto_filter();

    // Page setup
    let setup = sheet.page_setup();
    assert_eq!(setup.margins, Margins::narrow());
    assert_eq!(setup.orientation, Orientation::Landscape);
    assert_eq!(setup.fit_to_pages_wide, Some(1));
    assert_eq!(sheet.column_width(1), 36.0);
    assert_eq!(sheet.row_height(0), 24.0);

    // Title
    assert_eq!(sheet.merged_regions(), &[CellRange::parse("A1:C1").unwrap()]);
    assert_eq!(sheet.text_at(0, 2), Some("Account statement"));
    assert_eq!(sheet.number_format_at(0, 0), Some("@"));
    let title = &sheet.cell_at(0, 1).unwrap().format;
    assert!(title.font.bold);
    assert_eq!(title.font.size, 14.0);
    assert_eq!(title.horizontal, HorizontalAlignment::Center);
    assert!(title.include_alignment);

    // Body
    assert_eq!(sheet.text_at(1, 0), Some("2024-03-31"));
    assert_eq!(sheet.number_format_at(1, 0), Some("dd/mm/yyyy"));
    assert_eq!(sheet.number_format_at(1, 1), Some(""));
    assert!(sheet.cell_at(1, 1).unwrap().format.wrap_text);
    assert_eq!(
        sheet.number_format_at(1, 2),
        Some("R ### ### ##0.00;[Red]R -### ### ##0.00")
    );
    let amount = &sheet.cell_at(1, 2).unwrap().format;
    assert!(amount.include_border);
    assert_eq!(
        amount.borders.get(BorderIndex::InsideHorizontal),
        Some(&Border::new(LineStyle::Continuous, BorderWeight::Thin, Color::BLACK))
    );
    assert_eq!(amount.borders.get(BorderIndex::DiagonalDown), None);

    assert_eq!(
        sheet.auto_filter(),
        Some(CellRange::parse("A1:C2").unwrap())
    );
}

#[test]
fn test_numbers_follow_policy() {
    let number_policy = FormatPolicy::shared()
        .unwrap()
        .clone()
        .with_inference(FormatInference::new().numeric(NumericPolicy::Number));

    let mut sheet = MemorySheet::new("Sheet1");
    sheet.cells(0, 0).unwrap().set_value(1024.0, true).unwrap();
    sheet
        .cells(0, 1)
        .unwrap()
        .set_value_with(&number_policy, 1024.0, true)
        .unwrap();

    assert_eq!(sheet.number_format_at(0, 0), Some("dd/mm/yyyy"));
    assert_eq!(
        sheet.number_format_at(0, 1),
        Some("# ##0.00;[Red]-# ##0.00")
    );
    assert_eq!(sheet.text_at(0, 1), Some("1024"));
}

#[test]
fn test_custom_catalog() {
    let catalog = FormatCatalog::shared()
        .unwrap()
        .with_override(FormatCategory::ShortDate, "yyyy-mm-dd");
    let policy = FormatPolicy::new(catalog);

    let mut sheet = MemorySheet::new("Sheet1");
    sheet
        .cells(4, 4)
        .unwrap()
        .set_value_with(&policy, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(), true)
        .unwrap();

    assert_eq!(sheet.number_format_at(4, 4), Some("yyyy-mm-dd"));
}

#[test]
fn test_style_then_override() {
    let header = Style::new("Header")
        .bold(true)
        .font_color(Color::WHITE)
        .alignment(VerticalAlignment::Center, HorizontalAlignment::Left)
        .number_format("@");

    let mut sheet = MemorySheet::new("Sheet1");
    sheet
        .cells_range(0, 0, 0, 1)
        .unwrap()
        .apply_style(&header)
        .set_bold(false);

    let cell = sheet.cell_at(0, 1).unwrap();
    assert_eq!(cell.style_name.as_deref(), Some("Header"));
    assert_eq!(cell.number_format.as_deref(), Some("@"));
    assert_eq!(cell.format.font.color, Color::WHITE);
    assert!(!cell.format.font.bold);
}

#[test]
fn test_overlapping_merge_is_an_error() {
    let mut sheet = MemorySheet::new("Sheet1");
    sheet.cells_range(0, 0, 1, 1).unwrap().merge(true).unwrap();

    let err = sheet.cells_range(1, 1, 2, 2).unwrap().merge(true).unwrap_err();
    assert!(matches!(err, Error::Model(_)));
    assert_eq!(err.to_string(), "Range B2:C3 overlaps merged region A1:B2");
}
