//! Color wheel pointer mapping.
//!
//! The wheel is drawn in a square of side `size`. Hue runs around the
//! circle (0° on the +x axis, increasing clockwise in screen space since
//! y grows downward) and saturation grows from the center outward.
//! Lightness is fixed at 50% so every pick is a fully lit hue.

use serde::{Deserialize, Serialize};

use crate::color::Hsl;

/// Default wheel side length in pixels.
pub const DEFAULT_WHEEL_SIZE: f64 = 400.0;
/// Gap between the wheel edge and the square's edge.
const RIM_MARGIN: f64 = 10.0;
/// Lightness of every color picked from the wheel.
pub const WHEEL_LIGHTNESS: f64 = 50.0;

/// Geometry of a square color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    /// Side length of the square in pixels.
    pub size: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            size: DEFAULT_WHEEL_SIZE,
        }
    }
}

impl WheelGeometry {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    /// Center of the wheel in local pixel coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    /// Radius of the painted disc.
    pub fn radius(&self) -> f64 {
        (self.size / 2.0 - RIM_MARGIN).max(0.0)
    }

    /// Map a pointer position to the color under it.
    ///
    /// Returns `None` when the position lies outside the disc.
    pub fn pick(&self, x: f64, y: f64) -> Option<Hsl> {
        let (cx, cy) = self.center();
        let radius = self.radius();
        let dx = x - cx;
        let dy = y - cy;
        let distance = dx.hypot(dy);

        if radius <= 0.0 || distance > radius {
            return None;
        }

        let hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        let saturation = (distance / radius * 100.0).round().min(100.0);

        Some(Hsl::new(hue, saturation, WHEEL_LIGHTNESS))
    }

    /// Point on the wheel where `hsl` would be picked, for placing a marker.
    ///
    /// Lightness is ignored; the wheel has a single lightness.
    pub fn position_of(&self, hsl: Hsl) -> (f64, f64) {
        let (cx, cy) = self.center();
        let angle = hsl.h.to_radians();
        let distance = hsl.s.clamp(0.0, 100.0) / 100.0 * self.radius();
        (cx + distance * angle.cos(), cy + distance * angle.sin())
    }
}
