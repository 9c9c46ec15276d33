//! Cluster engine trait and the default k-means implementation
//!
//! Clustering runs in RGB space because the downstream de-duplication
//! contract is Euclidean RGB distance. Points are converted to
//! unit-scale `Srgb<f32>` for the solver and centroids are scaled back
//! to 0-255 before normalization.

use kmeans_colors::get_kmeans;
use palette::Srgb;

use crate::config::ClusteringConfig;
use crate::constants::clustering as defaults;

/// Raw cluster center in 0-255 RGB scale, prior to rounding
pub type Centroid = [f32; 3];

/// Strategy interface for finding `k` representative colors
///
/// Implementations must be deterministic for identical `points`, `k`,
/// and `seed`, and must converge on their own (the caller never retries).
pub trait ClusterEngine {
    /// Cluster `points` into at most `k` centers
    fn cluster(&self, points: &[[u8; 3]], k: usize, seed: u64) -> Vec<Centroid>;
}

/// Default engine: Lloyd's-iteration k-means via `kmeans_colors`
#[derive(Debug, Clone)]
pub struct KmeansEngine {
    max_iterations: usize,
    convergence: f32,
}

impl Default for KmeansEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl KmeansEngine {
    /// Create an engine with default iteration limits
    pub fn new() -> Self {
        Self {
            max_iterations: defaults::MAX_ITERATIONS,
            convergence: defaults::CONVERGENCE,
        }
    }

    /// Create an engine with custom iteration limits
    pub fn with_params(max_iterations: usize, convergence: f32) -> Self {
        Self {
            max_iterations,
            convergence,
        }
    }

    /// Create an engine from a configuration section
    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self::with_params(config.max_iterations, config.convergence)
    }
}

impl ClusterEngine for KmeansEngine {
    fn cluster(&self, points: &[[u8; 3]], k: usize, seed: u64) -> Vec<Centroid> {
        if points.is_empty() || k == 0 {
            return Vec::new();
        }

        let buffer: Vec<Srgb<f32>> = points
            .iter()
            .map(|&[r, g, b]| {
                Srgb::new(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                )
            })
            .collect();

        let result = get_kmeans(
            k,
            self.max_iterations,
            self.convergence,
            false,
            &buffer,
            seed,
        );

        // Centroids that captured no points sit wherever initialization
        // left them and represent nothing in the image; emit only the
        // supported ones.
        let mut supported = vec![false; result.centroids.len()];
        for &index in &result.indices {
            if let Some(flag) = supported.get_mut(index as usize) {
                *flag = true;
            }
        }

        result
            .centroids
            .iter()
            .zip(supported)
            .filter(|(_, has_points)| *has_points)
            .map(|(c, _)| [c.red * 255.0, c.green * 255.0, c.blue * 255.0])
            .collect()
    }
}
