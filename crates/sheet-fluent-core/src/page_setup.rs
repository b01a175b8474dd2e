//! Print layout of a worksheet

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Taller than wide (default)
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Landscape when `landscape` is true, portrait otherwise
    pub fn from_landscape(landscape: bool) -> Self {
        if landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub header: f64,
    pub footer: f64,
}

impl Margins {
    /// Excel's "Normal" preset
    pub fn normal() -> Self {
        Self {
            top: 0.75,
            bottom: 0.75,
            left: 0.7,
            right: 0.7,
            header: 0.3,
            footer: 0.3,
        }
    }

    /// Excel's "Narrow" preset
    ///
    /// Header and footer are stored single-precision by the engine, so they
    /// read back as `0.3f32` widened.
    pub fn narrow() -> Self {
        Self {
            top: 0.75,
            bottom: 0.75,
            left: 0.25,
            right: 0.25,
            header: 0.3_f32 as f64,
            footer: 0.3_f32 as f64,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::normal()
    }
}

/// Page setup of a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageSetup {
    /// Page margins
    pub margins: Margins,
    /// Page orientation
    pub orientation: Orientation,
    /// Scale to fit this many pages wide (`None` = no fit-to-width)
    pub fit_to_pages_wide: Option<u32>,
}
