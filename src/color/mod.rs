//! Color math module
//!
//! RGB/HSL conversions, hex encoding, and the Euclidean distance used by
//! perceptual de-duplication.

pub mod conversion;

pub use conversion::{parse_hex, rgb_distance, rgb_to_hex, rgb_to_hsl};
