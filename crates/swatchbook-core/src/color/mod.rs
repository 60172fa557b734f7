//! Color model and conversions.
//!
//! [`Color`] is the canonical 8-bit RGB value every tool agrees on. [`Hsl`]
//! is a derived view used by the sliders and the harmony wheel, and
//! [`Swatch`] bundles a color with the strings the UI displays for it.

pub mod conversion;
pub mod format;
pub mod model;

pub use conversion::{expand_short_hex, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use format::Swatch;
pub use model::{Color, Hsl};
