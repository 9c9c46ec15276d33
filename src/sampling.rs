//! Deterministic pixel sampling with background filtering
//!
//! Subsamples a decoded RGBA buffer into a bounded set of RGB points for
//! clustering. Sampling is stride-based rather than random: every
//! `stride`-th pixel is visited, so identical images always yield
//! identical point sets.
//!
//! Two filters discard pixels that are presumed background rather than
//! content: near-transparent pixels (low alpha) and pixels whose mean
//! luminance is near-white or near-black.

use crate::config::SamplingConfig;
use crate::constants::sampling as defaults;
use crate::image_loader::PixelBuffer;

/// Stride sampler with alpha and luminance filters
#[derive(Debug, Clone)]
pub struct PixelSampler {
    max_samples: usize,
    min_alpha: u8,
    min_luminance: f32,
    max_luminance: f32,
}

impl Default for PixelSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSampler {
    /// Create a sampler with default parameters
    pub fn new() -> Self {
        Self {
            max_samples: defaults::MAX_SAMPLES,
            min_alpha: defaults::MIN_ALPHA,
            min_luminance: defaults::MIN_LUMINANCE,
            max_luminance: defaults::MAX_LUMINANCE,
        }
    }

    /// Create a sampler with custom parameters
    pub fn with_params(
        max_samples: usize,
        min_alpha: u8,
        min_luminance: f32,
        max_luminance: f32,
    ) -> Self {
        Self {
            max_samples,
            min_alpha,
            min_luminance,
            max_luminance,
        }
    }

    /// Create a sampler from a configuration section
    pub fn from_config(config: &SamplingConfig) -> Self {
        Self::with_params(
            config.max_samples,
            config.min_alpha,
            config.min_luminance,
            config.max_luminance,
        )
    }

    /// Sample RGB points from an RGBA buffer
    ///
    /// Visits every `stride`-th pixel where
    /// `stride = max(1, total_pixels / max_samples)`, skipping pixels with
    /// `alpha < min_alpha` or mean luminance `(r+g+b)/3` outside
    /// `[min_luminance, max_luminance]`. Surviving points are returned in
    /// visit order, without deduplication.
    pub fn sample(&self, buffer: &PixelBuffer) -> Vec<[u8; 3]> {
        let total = buffer.total_pixels();
        if total == 0 || self.max_samples == 0 {
            return Vec::new();
        }

        let stride = (total / self.max_samples).max(1);
        let mut points = Vec::with_capacity(total.div_ceil(stride));

        let mut p = 0;
        while p < total {
            let i = p * 4;
            let r = buffer.data[i];
            let g = buffer.data[i + 1];
            let b = buffer.data[i + 2];
            let a = buffer.data[i + 3];
            p += stride;

            if a < self.min_alpha {
                continue;
            }

            let luminance = (r as f32 + g as f32 + b as f32) / 3.0;
            if luminance > self.max_luminance || luminance < self.min_luminance {
                continue;
            }

            points.push([r, g, b]);
        }

        points
    }
}
