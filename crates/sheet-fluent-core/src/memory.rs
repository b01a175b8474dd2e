//! In-memory object model
//!
//! [`MemorySheet`] records every property the fluent layer sets, so the
//! resulting state can be inspected without a spreadsheet engine.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::model::{RangeModel, WorksheetModel};
use crate::page_setup::PageSetup;
use crate::style::{RangeFormat, Style};

/// Default column width, in characters
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Default row height, in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Recorded state of one cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryCell {
    /// Value text
    pub text: String,
    /// Number format pattern (`None` = never set)
    pub number_format: Option<String>,
    /// Visual formatting
    pub format: RangeFormat,
    /// Name of the applied style
    pub style_name: Option<String>,
}

/// A worksheet held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    page_setup: PageSetup,
    cells: AHashMap<CellAddress, MemoryCell>,
    column_widths: BTreeMap<u16, f64>,
    row_heights: BTreeMap<u32, f64>,
    merged: Vec<CellRange>,
    auto_filter: Option<CellRange>,
}

impl MemorySheet {
    /// Create an empty worksheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Worksheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Page setup
    pub fn page_setup(&self) -> &PageSetup {
        &self.page_setup
    }

    /// Recorded state of a cell
    pub fn cell(&self, addr: CellAddress) -> Option<&MemoryCell> {
        self.cells.get(&addr)
    }

    /// Recorded state of a cell by row/column
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&MemoryCell> {
        self.cell(CellAddress::new(row, col))
    }

    /// Value text of a cell, if one was written
    pub fn text_at(&self, row: u32, col: u16) -> Option<&str> {
        self.cell_at(row, col).map(|cell| cell.text.as_str())
    }

    /// Number format of a cell, if one was set
    pub fn number_format_at(&self, row: u32, col: u16) -> Option<&str> {
        self.cell_at(row, col)
            .and_then(|cell| cell.number_format.as_deref())
    }

    /// Number of cells with recorded state
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Column width, falling back to the default
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Columns with a custom width
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    /// Row height, falling back to the default
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Merged regions, in the order they were merged
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged
    }

    /// Range the autofilter is on, if any
    pub fn auto_filter(&self) -> Option<CellRange> {
        self.auto_filter
    }

    fn cell_mut(&mut self, addr: CellAddress) -> &mut MemoryCell {
        self.cells.entry(addr).or_default()
    }
}

impl WorksheetModel for MemorySheet {
    type Range<'a> = MemoryRange<'a>;

    fn page_setup_mut(&mut self) -> &mut PageSetup {
        &mut self.page_setup
    }

    fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    fn range(&mut self, range: CellRange) -> MemoryRange<'_> {
        MemoryRange { sheet: self, range }
    }
}

/// A range of a [`MemorySheet`]
#[derive(Debug)]
pub struct MemoryRange<'a> {
    sheet: &'a mut MemorySheet,
    range: CellRange,
}

impl MemoryRange<'_> {
    fn for_each_cell(&mut self, mut apply: impl FnMut(&mut MemoryCell)) {
        for addr in self.range.cells() {
            apply(self.sheet.cell_mut(addr));
        }
    }
}

impl RangeModel for MemoryRange<'_> {
    fn address(&self) -> CellRange {
        self.range
    }

    fn write_text(&mut self, text: &str) {
        self.for_each_cell(|cell| cell.text = text.to_string());
    }

    fn write_number_format(&mut self, pattern: &str) {
        self.for_each_cell(|cell| cell.number_format = Some(pattern.to_string()));
    }

    fn merge_cells(&mut self) -> Result<()> {
        let range = self.range;
        if self.sheet.merged.contains(&range) {
            return Ok(());
        }
        if let Some(existing) = self.sheet.merged.iter().find(|m| m.overlaps(&range)) {
            return Err(Error::MergedCellConflict(
                range.to_string(),
                existing.to_string(),
            ));
        }
        log::debug!("Merging {} on '{}'", range, self.sheet.name);
        self.sheet.merged.push(range);
        Ok(())
    }

    fn unmerge_cells(&mut self) {
        let range = self.range;
        self.sheet.merged.retain(|m| !m.overlaps(&range));
    }

    fn auto_filter(&mut self) {
        self.sheet.auto_filter = match self.sheet.auto_filter {
            Some(current) if current == self.range => None,
            _ => Some(self.range),
        };
    }

    fn set_column_width(&mut self, width: f64) {
        for col in self.range.cols() {
            self.sheet.column_widths.insert(col, width);
        }
    }

    fn set_row_height(&mut self, height: f64) {
        for row in self.range.rows() {
            self.sheet.row_heights.insert(row, height);
        }
    }

    fn update_format(&mut self, mut update: impl FnMut(&mut RangeFormat)) {
        self.for_each_cell(|cell| update(&mut cell.format));
    }

    fn set_style(&mut self, style: &Style) {
        self.for_each_cell(|cell| {
            cell.format = style.format.clone();
            cell.style_name = Some(style.name.clone());
            if let Some(pattern) = &style.number_format {
                cell.number_format = Some(pattern.clone());
            }
        });
    }
}
