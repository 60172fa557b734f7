//! Image loading and downscaling for palette extraction.

use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;
use swatchbook_core::ColorError;
use swatchbook_core::image::{PixelBuffer, fit_within};

/// Load an image from disk and convert it to an RGBA8 [`PixelBuffer`]
/// whose longer side is at most `max_dimension`.
///
/// Supports the formats enabled in the `image` crate (PNG, JPEG, GIF, ...).
/// Files whose extension does not name an image format are rejected before
/// any decoding happens.
pub fn load_image(path: &Path, max_dimension: u32) -> Result<PixelBuffer, ImageLoadError> {
    if image::ImageFormat::from_path(path).is_err() {
        return Err(ImageLoadError::NotAnImage(path.display().to_string()));
    }

    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    tracing::info!(
        "decoded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    to_pixel_buffer(img, max_dimension)
}

/// Downscale (if needed) and flatten a decoded image to RGBA8.
pub fn to_pixel_buffer(img: DynamicImage, max_dimension: u32) -> Result<PixelBuffer, ImageLoadError> {
    let (width, height) = fit_within(img.width(), img.height(), max_dimension);

    let img = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        tracing::debug!(
            "scaling {}x{} -> {width}x{height}",
            img.width(),
            img.height()
        );
        img.resize_exact(width, height, FilterType::Triangle)
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

/// Errors that can occur during image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("not an image file: {0}")]
    NotAnImage(String),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error(transparent)]
    Buffer(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_large_image_is_scaled_to_fit() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1000, 400, Rgba([10, 20, 30, 255])));
        let buffer = to_pixel_buffer(img, 500).unwrap();

        assert_eq!((buffer.width(), buffer.height()), (500, 200));
        assert!(buffer.pixels().iter().all(|p| *p == [10, 20, 30, 255]));
    }

    #[test]
    fn test_small_image_is_kept() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4])));
        let buffer = to_pixel_buffer(img, 500).unwrap();

        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert_eq!(buffer.as_bytes().len(), 24);
    }

    #[test]
    fn test_non_image_extension_is_rejected() {
        let err = load_image(Path::new("notes.txt"), 500).unwrap_err();
        assert!(matches!(err, ImageLoadError::NotAnImage(_)), "{err}");
    }

    #[test]
    fn test_missing_file_fails_to_decode() {
        let path = std::env::temp_dir().join("swatchbook-missing-image.png");
        let err = load_image(&path, 500).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)), "{err}");
    }

    #[test]
    fn test_round_trips_through_png() {
        let path = std::env::temp_dir().join(format!("swatchbook-loader-{}.png", std::process::id()));
        RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]))
            .save(&path)
            .unwrap();

        let buffer = load_image(&path, 500);
        let _ = std::fs::remove_file(&path);

        let buffer = buffer.unwrap();
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.pixels()[0], [200, 100, 50, 255]);
    }
}
