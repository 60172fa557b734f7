//! Raster input for palette extraction.

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// Longest side, in pixels, images are scaled to before extraction.
pub const DEFAULT_MAX_DIMENSION: u32 = 500;

/// Row-major RGBA8 pixel data with its dimensions.
///
/// The byte length is always exactly `width * height * 4`. Deserialized
/// buffers go through [`PixelBuffer::new`] and are held to the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPixelBuffer")]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, validating the length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(ColorError::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A `width × height` buffer filled with one RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let count = byte_len(width, height)? / 4;
        Ok(Self {
            width,
            height,
            data: rgba.repeat(count),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.data.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixels as `[r, g, b, a]` quadruplets.
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }
}

/// Unchecked wire form of [`PixelBuffer`].
#[derive(Deserialize)]
struct RawPixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl TryFrom<RawPixelBuffer> for PixelBuffer {
    type Error = ColorError;

    fn try_from(raw: RawPixelBuffer) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.data)
    }
}

/// `width * height * 4`, or an error when that does not fit in `usize`.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|n| n.checked_mul(4))
        .ok_or(ColorError::DimensionsTooLarge { width, height })
}

/// Scale `(width, height)` so the longer side is at most `max_dimension`,
/// keeping the aspect ratio. Images already within bounds are unchanged.
///
/// The scaled side is truncated, never rounded up, and is at least 1.
/// A square image counts as "tall": the height is the side that gets
/// clamped, which yields the same result.
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let scale = |side: u32, long: u32| {
        ((f64::from(side) * f64::from(max_dimension) / f64::from(long)).floor() as u32).max(1)
    };

    if width > height {
        if width > max_dimension {
            return (max_dimension, scale(height, width));
        }
    } else if height > max_dimension {
        return (scale(width, height), max_dimension);
    }
    (width, height)
}
