//! State of the HSL/RGB/HEX picker.
//!
//! The picker keeps one canonical [`Color`] plus the HSL view its sliders
//! show. Every input (hex field, rgb field, hsl field, sliders, native
//! color input) funnels through an idempotent setter; the presentation
//! layer re-reads [`PickerState::snapshot`] whenever a setter reports a
//! change and decides for itself which widgets to refresh.

use serde::{Deserialize, Serialize};

use crate::color::format::display_components;
use crate::color::{Color, Hsl, Swatch};
use crate::normalize::{self, FieldKind};

/// Color the picker starts with (`#4285f4`).
pub const DEFAULT_COLOR: Color = Color::new(0x42, 0x85, 0xf4);

/// Maximum hue slider value.
const HUE_MAX: u16 = 360;
/// Maximum saturation and lightness slider value.
const PERCENT_MAX: u8 = 100;

/// Canonical picker color and its HSL view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerState {
    color: Color,
    hsl: Hsl,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl PickerState {
    /// Start from `color`, deriving the HSL view.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            hsl: color.to_hsl(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Set the color directly (e.g. from a native color input).
    pub fn set_color(&mut self, color: Color) -> bool {
        self.replace(Self::new(color))
    }

    /// Apply text typed into one of the three fields. Text that does not
    /// normalize to a color leaves the state untouched.
    pub fn set_text(&mut self, kind: FieldKind, text: &str) -> bool {
        match normalize::normalize(kind, text) {
            Some(color) => self.set_color(color),
            None => false,
        }
    }

    pub fn set_hex_text(&mut self, text: &str) -> bool {
        self.set_text(FieldKind::Hex, text)
    }

    pub fn set_rgb_text(&mut self, text: &str) -> bool {
        self.set_text(FieldKind::Rgb, text)
    }

    pub fn set_hsl_text(&mut self, text: &str) -> bool {
        self.set_text(FieldKind::Hsl, text)
    }

    /// Apply slider positions. The HSL view keeps the slider values exactly;
    /// the color is derived from them. Values beyond the slider ranges are
    /// clamped.
    pub fn set_sliders(&mut self, h: u16, s: u8, l: u8) -> bool {
        let hsl = Hsl::new(
            f64::from(h.min(HUE_MAX)),
            f64::from(s.min(PERCENT_MAX)),
            f64::from(l.min(PERCENT_MAX)),
        );
        self.replace(Self {
            color: hsl.to_color(),
            hsl,
        })
    }

    /// Everything the UI shows for the current color.
    pub fn snapshot(&self) -> PickerSnapshot {
        let swatch = Swatch::new(self.color, self.hsl);
        PickerSnapshot {
            hex_field: swatch.hex.to_uppercase(),
            sliders: display_components(self.hsl),
            swatch,
        }
    }

    fn replace(&mut self, next: Self) -> bool {
        if *self == next {
            return false;
        }
        tracing::debug!(from = %self.color, to = %next.color, "picker color changed");
        *self = next;
        true
    }
}

/// Display state of the picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    /// Color, HSL view and display strings.
    pub swatch: Swatch,
    /// Hex field text (`#RRGGBB`, uppercase).
    pub hex_field: String,
    /// Slider positions `[h, s, l]`.
    pub sliders: [i32; 3],
}
