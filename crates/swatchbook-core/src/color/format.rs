//! Display strings for colors.

use serde::{Deserialize, Serialize};

use super::model::{Color, Hsl};

/// `rgb(r, g, b)`
pub fn rgb_string(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

/// `hsl(h, s%, l%)` with each component rounded to an integer.
pub fn hsl_string(hsl: Hsl) -> String {
    let [h, s, l] = display_components(hsl);
    format!("hsl({h}, {s}%, {l}%)")
}

/// Bare `r, g, b` readout used under the color wheel.
pub fn rgb_readout(color: Color) -> String {
    format!("{}, {}, {}", color.r, color.g, color.b)
}

/// Bare `h°, s%, l%` readout used under the color wheel.
pub fn hsl_readout(hsl: Hsl) -> String {
    let [h, s, l] = display_components(hsl);
    format!("{h}°, {s}%, {l}%")
}

/// Integer components as shown in text fields and on the sliders.
pub fn display_components(hsl: Hsl) -> [i32; 3] {
    let Hsl { h, s, l } = hsl.rounded();
    [h as i32, s as i32, l as i32]
}

/// A color together with every representation the UI paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    /// Canonical color.
    pub color: Color,
    /// HSL view the strings were produced from.
    pub hsl: Hsl,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// `rgb(r, g, b)`.
    pub rgb_text: String,
    /// `hsl(h, s%, l%)`.
    pub hsl_text: String,
}

impl Swatch {
    /// Build from a canonical color, deriving the HSL view.
    pub fn from_color(color: Color) -> Self {
        Self::new(color, color.to_hsl())
    }

    /// Build from an HSL value, keeping it as the displayed HSL rather than
    /// re-deriving it from the rounded RGB.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::new(hsl.to_color(), hsl)
    }

    /// Build from a color and the HSL view to display alongside it.
    pub fn new(color: Color, hsl: Hsl) -> Self {
        Self {
            color,
            hsl,
            hex: color.to_hex(),
            rgb_text: rgb_string(color),
            hsl_text: hsl_string(hsl),
        }
    }
}
