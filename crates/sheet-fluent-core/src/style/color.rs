//! Color representation

use std::fmt;

/// A color as the object model stores it
///
/// Engines address colors as packed 32-bit ARGB values; [`Color::from_argb`]
/// and [`Color::to_argb`] convert between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// Opaque RGB color
    Rgb { r: u8, g: u8, b: u8 },

    /// RGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    /// Black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// White
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Red
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Green
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    /// Blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create an opaque RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Unpack a `0xAARRGGBB` value
    ///
    /// Fully opaque values become [`Color::Rgb`].
    pub const fn from_argb(value: u32) -> Self {
        let [a, r, g, b] = value.to_be_bytes();
        if a == 0xFF {
            Color::Rgb { r, g, b }
        } else {
            Color::Argb { a, r, g, b }
        }
    }

    /// Pack into a `0xAARRGGBB` value; [`Color::Auto`] packs as opaque black
    pub const fn to_argb(&self) -> u32 {
        let (a, r, g, b) = match *self {
            Color::Auto => (0xFF, 0, 0, 0),
            Color::Rgb { r, g, b } => (0xFF, r, g, b),
            Color::Argb { a, r, g, b } => (a, r, g, b),
        };
        u32::from_be_bytes([a, r, g, b])
    }

    /// Parse `#RRGGBB`, `RRGGBB` or `AARRGGBB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Color::from_argb(0xFF00_0000 | value)),
            8 => Some(Color::from_argb(value)),
            _ => None,
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            _ => write!(f, "#{:08X}", self.to_argb()),
        }
    }
}
