//! Value types for colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::conversion;
use crate::error::ColorError;

/// Canonical color: 8-bit sRGB channels.
///
/// Equality is structural. Every `Color` round-trips losslessly through its
/// `#rrggbb` form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        conversion::rgb_to_hex(self.r, self.g, self.b)
    }

    /// Strict `#RRGGBB` parse. See [`conversion::hex_to_rgb`].
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        conversion::hex_to_rgb(hex)
    }

    /// HSL view of this color in degrees / percent.
    pub fn to_hsl(self) -> Hsl {
        conversion::rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        conversion::hex_to_rgb(s)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for palette::Srgb<u8> {
    fn from(c: Color) -> Self {
        palette::Srgb::new(c.r, c.g, c.b)
    }
}

impl From<palette::Srgb<u8>> for Color {
    fn from(c: palette::Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

/// HSL triple: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`.
///
/// This is a derived view and is not canonical: at zero saturation every
/// hue maps to the same gray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to the canonical 8-bit color.
    pub fn to_color(self) -> Color {
        conversion::hsl_to_rgb(self.h / 360.0, self.s / 100.0, self.l / 100.0)
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Round each component to the nearest integer, as the UI displays it.
    pub fn rounded(self) -> Self {
        Self::new(self.h.round(), self.s.round(), self.l.round())
    }
}
