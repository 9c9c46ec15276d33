//! Swatch type and palette assembly
//!
//! A [`Swatch`] is one finalized palette color carrying both its RGB
//! triple and hex notation. Assembly helpers live in the submodules:
//! perceptual de-duplication in [`dedup`] and hue-based ordering in
//! [`sort`].

pub mod dedup;
pub mod sort;

pub use dedup::dedupe_colors;
pub use sort::sort_colors;

use serde::Serialize;

use crate::color::conversion::rgb_to_hex;

/// One finalized palette color
///
/// The hex field is always derived from the RGB triple at construction,
/// so the two representations cannot disagree. Swatches serialize for
/// API/CLI output but are only constructed through [`Swatch::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    rgb: [u8; 3],
    hex: String,
}

impl Swatch {
    /// Create a swatch from an RGB triple, deriving its hex notation
    pub fn new(rgb: [u8; 3]) -> Self {
        Self {
            rgb,
            hex: rgb_to_hex(rgb),
        }
    }

    /// The color as an RGB triple
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// The color in uppercase `#RRGGBB` notation
    pub fn hex(&self) -> &str {
        &self.hex
    }
}
