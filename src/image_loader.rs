//! Image decoding and downscaling
//!
//! Single entry point for turning user-supplied bytes into the RGBA pixel
//! buffer the sampler consumes. Images are downscaled so the longest side
//! is at most [`crate::constants::processing::MAX_DIMENSION`] pixels,
//! preserving aspect ratio.
//!
//! Decoding is delegated to the `image` crate; any decode failure is
//! reported as [`ExtractionError::UnreadableImage`] with a message that
//! names the accepted formats.

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use std::path::Path;

use crate::error::{ExtractionError, Result};

/// Decoded, downscaled pixel data: row-major RGBA, 4 bytes per pixel,
/// top-to-bottom.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Number of pixels in the buffer
    pub fn total_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Decode an image from raw file bytes
///
/// # Errors
///
/// Returns `ExtractionError::UnreadableImage` if the bytes are not a
/// decodable image in a supported format.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| ExtractionError::unreadable_image("Unable to decode image data", e))
}

/// Read and decode an image file from disk
///
/// # Errors
///
/// Returns `ExtractionError::UnreadableImage` if the file cannot be read
/// or its contents cannot be decoded.
pub fn load_from_path(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        ExtractionError::unreadable_image(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;
    decode_bytes(&bytes)
}

/// Downscale so the longest dimension is at most `max_dimension` pixels
///
/// Images already within bounds are converted to RGBA without resampling.
/// Output dimensions are `round(dim * scale)`, floored to a minimum of 1,
/// so extreme aspect ratios never collapse to a zero-sized buffer.
pub fn downscale(img: &DynamicImage, max_dimension: u32) -> PixelBuffer {
    let (width, height) = img.dimensions();
    let longest = width.max(height) as f32;
    let scale = (max_dimension as f32 / longest).min(1.0);

    let rgba = if scale < 1.0 {
        let target_w = ((width as f32 * scale).round().max(1.0)) as u32;
        let target_h = ((height as f32 * scale).round().max(1.0)) as u32;
        image::imageops::resize(img, target_w, target_h, FilterType::Triangle)
    } else {
        img.to_rgba8()
    };

    let (width, height) = rgba.dimensions();
    PixelBuffer {
        width,
        height,
        data: rgba.into_raw(),
    }
}

/// File extensions accepted by the CLI and path-based entry points
pub fn supported_extensions() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "webp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
