//! Border types

use super::Color;

/// Which edge of a range a border applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderIndex {
    /// Left outer edge
    Left,
    /// Top outer edge
    Top,
    /// Right outer edge
    Right,
    /// Bottom outer edge
    Bottom,
    /// Top-left to bottom-right diagonal
    DiagonalDown,
    /// Bottom-left to top-right diagonal
    DiagonalUp,
    /// Vertical lines between cells of the range
    InsideVertical,
    /// Horizontal lines between cells of the range
    InsideHorizontal,
}

impl BorderIndex {
    /// Every edge
    pub const ALL: [BorderIndex; 8] = [
        BorderIndex::Left,
        BorderIndex::Top,
        BorderIndex::Right,
        BorderIndex::Bottom,
        BorderIndex::DiagonalDown,
        BorderIndex::DiagonalUp,
        BorderIndex::InsideVertical,
        BorderIndex::InsideHorizontal,
    ];

    /// Outer and inside edges; what a whole-collection border assignment touches
    pub const GRID: [BorderIndex; 6] = [
        BorderIndex::Left,
        BorderIndex::Top,
        BorderIndex::Right,
        BorderIndex::Bottom,
        BorderIndex::InsideVertical,
        BorderIndex::InsideHorizontal,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Line pattern of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// No line
    #[default]
    None,
    /// Solid line
    Continuous,
    /// Dashed line
    Dash,
    /// Dash-dot
    DashDot,
    /// Dash-dot-dot
    DashDotDot,
    /// Dotted line
    Dot,
    /// Double line
    Double,
    /// Slanted dash-dot
    SlantDashDot,
}

/// Thickness of a border line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderWeight {
    /// Hairline
    Hairline,
    /// Thin (default)
    #[default]
    Thin,
    /// Medium
    Medium,
    /// Thick
    Thick,
}

/// One border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Border {
    /// Line pattern
    pub line: LineStyle,
    /// Line thickness
    pub weight: BorderWeight,
    /// Line color
    pub color: Color,
}

impl Border {
    /// Create a border edge
    pub fn new(line: LineStyle, weight: BorderWeight, color: Color) -> Self {
        Self {
            line,
            weight,
            color,
        }
    }

    /// Thin solid black line
    pub fn thin() -> Self {
        Self::new(LineStyle::Continuous, BorderWeight::Thin, Color::BLACK)
    }
}

/// Border settings for every edge of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Borders {
    edges: [Option<Border>; 8],
}

impl Borders {
    /// No borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Border on one edge
    pub fn get(&self, index: BorderIndex) -> Option<&Border> {
        self.edges[index.slot()].as_ref()
    }

    /// Set one edge
    pub fn set(&mut self, index: BorderIndex, border: Border) {
        self.edges[index.slot()] = Some(border);
    }

    /// Remove one edge
    pub fn clear(&mut self, index: BorderIndex) {
        self.edges[index.slot()] = None;
    }

    /// Set every outer and inside edge, leaving diagonals alone
    pub fn set_grid(&mut self, border: Border) {
        for index in BorderIndex::GRID {
            self.set(index, border);
        }
    }

    /// Check if no edge has a border
    pub fn is_empty(&self) -> bool {
        self.edges.iter().all(Option::is_none)
    }
}
