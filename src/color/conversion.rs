//! Color conversion utilities
//!
//! Provides the conversions the palette pipeline relies on:
//! - RGB to HSL for perceptual ordering
//! - RGB to uppercase hex and back
//! - Euclidean RGB distance for de-duplication

use palette::{FromColor, Hsl, Srgb};

use crate::error::{ExtractionError, Result};

/// Convert an RGB triple to uppercase hex notation
///
/// # Examples
///
/// ```
/// assert_eq!(pixel_palette::color::rgb_to_hex([255, 0, 170]), "#FF00AA");
/// ```
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Parse a hex color string (with or without leading `#`) to RGB
///
/// # Errors
///
/// Returns `ExtractionError::InvalidParameter` if the string is not six
/// hex digits.
pub fn parse_hex(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(ExtractionError::invalid_parameter("hex", hex));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ExtractionError::invalid_parameter("hex", hex))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Convert an RGB triple to `(hue, saturation, lightness)`
///
/// Hue is in degrees `[0, 360)`; saturation and lightness are fractions
/// in `[0, 1]`. Degenerate grays may report `NaN` hue or saturation
/// depending on the conversion path; callers that order colors must
/// sanitize those (see [`crate::swatch::sort`]).
pub fn rgb_to_hsl(rgb: [u8; 3]) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    let hsl = Hsl::from_color(srgb);
    (
        hsl.hue.into_positive_degrees(),
        hsl.saturation,
        hsl.lightness,
    )
}

/// Euclidean distance between two colors in RGB space
pub fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}
