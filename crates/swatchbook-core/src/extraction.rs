//! Frequency-ranked palette extraction.
//!
//! # Algorithm
//! 1. Sample every `sample_stride`-th pixel (alpha is ignored)
//! 2. Quantize each channel to the nearest multiple of `bucket_size`
//! 3. Count samples per quantized bucket, remembering the latest original
//!    sample as the bucket's representative
//! 4. Stable-sort buckets by count, most frequent first
//! 5. Keep the first `max_colors`
//!
//! ```text
//!   pixels ──→ stride ──→ quantize ──→ count ──→ sort ──→ top N
//! ```
//!
//! Sampling a subset trades accuracy for speed on large images. Ties keep
//! the order in which buckets were first seen, so the output is fully
//! determined by the buffer and the config.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::image::PixelBuffer;

/// Default distance between sampled pixels.
const DEFAULT_SAMPLE_STRIDE: usize = 4;
/// Default quantization step per channel.
const DEFAULT_BUCKET_SIZE: u16 = 32;
/// Default palette length.
const DEFAULT_MAX_COLORS: usize = 10;

/// Tunables for [`extract_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Sample one pixel out of every `sample_stride`. 0 is treated as 1.
    pub sample_stride: usize,
    /// Channel quantization step. 0 is treated as 1.
    pub bucket_size: u16,
    /// Maximum number of palette entries returned.
    pub max_colors: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            bucket_size: DEFAULT_BUCKET_SIZE,
            max_colors: DEFAULT_MAX_COLORS,
        }
    }
}

/// One palette color and how many samples landed in its bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Representative (unquantized) sample.
    pub color: Color,
    /// Lowercase `#rrggbb` of [`Self::color`].
    pub hex: String,
    /// Number of samples in the bucket.
    pub count: u32,
}

/// Quantized channel triple. Channels can reach 256 when rounding up.
type BucketKey = [u16; 3];

/// Extract the most frequent colors of `buffer`.
pub fn extract_palette(buffer: &PixelBuffer, config: &ExtractionConfig) -> Vec<PaletteEntry> {
    let stride = config.sample_stride.max(1);
    let bucket_size = config.bucket_size.max(1);

    let mut index: HashMap<BucketKey, usize> = HashMap::new();
    let mut buckets: Vec<(Color, u32)> = Vec::new();
    let mut samples = 0usize;

    for px in buffer.pixels().iter().step_by(stride) {
        samples += 1;
        let color = Color::new(px[0], px[1], px[2]);
        let key = color.to_array().map(|c| quantize(c, bucket_size));

        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push((color, 0));
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        bucket.0 = color;
        bucket.1 += 1;
    }

    // `sort_by` is stable: equal counts keep first-seen order.
    buckets.sort_by(|a, b| b.1.cmp(&a.1));
    buckets.truncate(config.max_colors);

    tracing::debug!(
        pixels = buffer.len(),
        samples,
        distinct = index.len(),
        kept = buckets.len(),
        "palette extracted"
    );

    buckets
        .into_iter()
        .map(|(color, count)| PaletteEntry {
            color,
            hex: color.to_hex(),
            count,
        })
        .collect()
}

/// Round to the nearest multiple of `step`, halves rounding up.
fn quantize(channel: u8, step: u16) -> u16 {
    (u16::from(channel) + step / 2) / step * step
}
