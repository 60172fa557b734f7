//! Swatchbook Core — domain layer for the color picker tools.
//!
//! This crate contains the color-space conversions, text normalization,
//! palette extraction, harmony generation, and color wheel geometry.
//! No I/O or UI framework dependencies.

pub mod color;
pub mod error;
pub mod extraction;
pub mod harmony;
pub mod image;
pub mod normalize;
pub mod picker;
pub mod wheel;

// Re-exports for convenience.
pub use color::{Color, Hsl, Swatch};
pub use error::{ColorError, Result};
pub use extraction::{ExtractionConfig, PaletteEntry, extract_palette};
pub use harmony::{HarmonyScheme, HarmonySet};
pub use image::PixelBuffer;
pub use picker::{PickerSnapshot, PickerState};
pub use wheel::WheelGeometry;
