//! Application configuration for the demo host.

use std::str::FromStr;

use swatchbook_core::ExtractionConfig;
use swatchbook_core::image::DEFAULT_MAX_DIMENSION;
use swatchbook_core::wheel::DEFAULT_WHEEL_SIZE;

/// Default tracing filter.
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the Swatchbook demo host.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Longest side images are scaled to before palette extraction.
    pub max_image_size: u32,
    /// Palette extraction tunables.
    pub extraction: ExtractionConfig,
    /// Side length of the color wheel in pixels.
    pub wheel_size: f64,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl AppConfig {
    /// Build the config from a variable lookup, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ExtractionConfig::default();

        Self {
            max_image_size: parsed(&lookup, "SWATCHBOOK_MAX_IMAGE_SIZE")
                .filter(|&v: &u32| v > 0)
                .unwrap_or(DEFAULT_MAX_DIMENSION),
            extraction: ExtractionConfig {
                sample_stride: parsed(&lookup, "SWATCHBOOK_SAMPLE_STRIDE")
                    .unwrap_or(defaults.sample_stride),
                bucket_size: defaults.bucket_size,
                max_colors: parsed(&lookup, "SWATCHBOOK_MAX_COLORS").unwrap_or(defaults.max_colors),
            },
            wheel_size: parsed(&lookup, "SWATCHBOOK_WHEEL_SIZE")
                .filter(|&v: &f64| v > 0.0)
                .unwrap_or(DEFAULT_WHEEL_SIZE),
            log_filter: lookup("SWATCHBOOK_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
