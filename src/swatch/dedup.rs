//! Perceptual de-duplication of cluster colors
//!
//! Greedy and order-preserving: the first occurrence of a color wins,
//! and later candidates within the distance threshold of any kept color
//! are dropped. Quadratic over the (at most 12-entry) center list.

use crate::color::conversion::rgb_distance;

/// Remove colors within `threshold` RGB distance of an earlier kept color
pub fn dedupe_colors(colors: &[[u8; 3]], threshold: f32) -> Vec<[u8; 3]> {
    let mut kept: Vec<[u8; 3]> = Vec::with_capacity(colors.len());

    for &candidate in colors {
        let too_close = kept
            .iter()
            .any(|&existing| rgb_distance(existing, candidate) < threshold);
        if !too_close {
            kept.push(candidate);
        }
    }

    kept
}
