//! Color harmony schemes.
//!
//! Each scheme is a fixed list of hue offsets applied to a base color.
//! Saturation and lightness are carried over unchanged and every hue is
//! wrapped into `[0, 360)`.
//!
//! | scheme        | offsets                |
//! |---------------|------------------------|
//! | analogous     | −30, 0, +30            |
//! | complementary | 0, +180                |
//! | triadic       | 0, +120, +240          |
//! | tetradic      | 0, +60, +180, +240     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Swatch};
use crate::error::ColorError;

const ANALOGOUS: [f64; 3] = [-30.0, 0.0, 30.0];
const COMPLEMENTARY: [f64; 2] = [0.0, 180.0];
const TRIADIC: [f64; 3] = [0.0, 120.0, 240.0];
const TETRADIC: [f64; 4] = [0.0, 60.0, 180.0, 240.0];

/// Supported harmony schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyScheme {
    /// Neighbors 30° either side of the base.
    #[default]
    Analogous,
    /// The base and its opposite.
    Complementary,
    /// Three hues evenly spaced around the wheel.
    Triadic,
    /// Two complementary pairs forming a rectangle.
    Tetradic,
}

impl HarmonyScheme {
    /// Hue offsets in degrees, in output order.
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Analogous => &ANALOGOUS,
            Self::Complementary => &COMPLEMENTARY,
            Self::Triadic => &TRIADIC,
            Self::Tetradic => &TETRADIC,
        }
    }

    /// Lowercase tag used by the UI buttons.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }

    /// All schemes in UI order.
    pub fn all() -> &'static [Self] {
        const ALL: [HarmonyScheme; 4] = [
            HarmonyScheme::Analogous,
            HarmonyScheme::Complementary,
            HarmonyScheme::Triadic,
            HarmonyScheme::Tetradic,
        ];
        &ALL
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HarmonyScheme {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|scheme| scheme.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownScheme(s.to_string()))
    }
}

/// Derive the harmony colors of `base` under `scheme`.
pub fn generate(base: Hsl, scheme: HarmonyScheme) -> Vec<Hsl> {
    scheme
        .offsets()
        .iter()
        .map(|&offset| base.rotate(offset))
        .collect()
}

/// A harmony ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonySet {
    /// Scheme the set was generated with.
    pub scheme: HarmonyScheme,
    /// Base color the offsets were applied to.
    pub base: Hsl,
    /// Generated colors in scheme order.
    pub swatches: Vec<Swatch>,
}

impl HarmonySet {
    pub fn new(base: Hsl, scheme: HarmonyScheme) -> Self {
        let swatches = generate(base, scheme)
            .into_iter()
            .map(Swatch::from_hsl)
            .collect();
        Self {
            scheme,
            base,
            swatches,
        }
    }

    /// Hex strings of the set, in order.
    pub fn hexes(&self) -> Vec<&str> {
        self.swatches.iter().map(|s| s.hex.as_str()).collect()
    }
}
