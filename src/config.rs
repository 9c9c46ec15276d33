//! Configuration structures for the palette extraction pipeline.
//!
//! All tunable parameters, organized into logical groups for sampling,
//! clustering, and palette assembly. Defaults mirror [`crate::constants`].
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use pixel_palette::ExtractorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractorConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractorConfig::default();
//! # Ok::<(), pixel_palette::ExtractionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants;
use crate::error::{ExtractionError, Result};

/// Complete configuration for one palette extraction.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Longest image dimension after downscaling, in pixels
    pub max_dimension: u32,

    /// Pixel sampling configuration
    pub sampling: SamplingConfig,

    /// Clustering configuration
    pub clustering: ClusteringConfig,

    /// Palette assembly configuration
    pub palette: PaletteConfig,
}

/// Pixel sampling parameters.
///
/// Controls how many pixels are visited and which ones are discarded as
/// background before clustering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Maximum number of pixels sampled from the downscaled image
    pub max_samples: usize,

    /// Alpha values below this are skipped as transparent
    pub min_alpha: u8,

    /// Mean luminance below this is skipped as near-black
    pub min_luminance: f32,

    /// Mean luminance above this is skipped as near-white
    pub max_luminance: f32,

    /// Minimum surviving points required before clustering runs
    pub min_sample_points: usize,
}

/// K-means clustering parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Random seed for centroid initialization
    pub seed: u64,

    /// Maximum Lloyd's iterations per run
    pub max_iterations: usize,

    /// Convergence threshold on the per-iteration score delta
    pub convergence: f32,
}

/// Palette assembly parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// RGB Euclidean distance below which two colors are duplicates
    pub dedup_threshold: f32,

    /// Lower clamp for the requested swatch count
    pub min_swatches: usize,

    /// Upper clamp for the requested swatch count
    pub max_swatches: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_dimension: constants::processing::MAX_DIMENSION,
            sampling: SamplingConfig {
                max_samples: constants::sampling::MAX_SAMPLES,
                min_alpha: constants::sampling::MIN_ALPHA,
                min_luminance: constants::sampling::MIN_LUMINANCE,
                max_luminance: constants::sampling::MAX_LUMINANCE,
                min_sample_points: constants::sampling::MIN_SAMPLE_POINTS,
            },
            clustering: ClusteringConfig {
                seed: constants::clustering::SEED,
                max_iterations: constants::clustering::MAX_ITERATIONS,
                convergence: constants::clustering::CONVERGENCE,
            },
            palette: PaletteConfig {
                dedup_threshold: constants::palette::DEDUP_THRESHOLD,
                min_swatches: constants::palette::MIN_SWATCHES,
                max_swatches: constants::palette::MAX_SWATCHES,
            },
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::invalid_parameter(
                "config_path",
                format!("{} ({})", path.display(), e),
            )
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ExtractionError::invalid_parameter("config_json", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractionError::invalid_parameter("config_json", e))?;
        std::fs::write(path, json).map_err(|e| {
            ExtractionError::invalid_parameter(
                "config_path",
                format!("{} ({})", path.display(), e),
            )
        })?;
        Ok(())
    }

    /// Check internal consistency of all parameter groups
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(ExtractionError::invalid_parameter(
                "max_dimension",
                self.max_dimension,
            ));
        }
        if self.sampling.max_samples == 0 {
            return Err(ExtractionError::invalid_parameter(
                "sampling.max_samples",
                self.sampling.max_samples,
            ));
        }
        if self.sampling.min_luminance >= self.sampling.max_luminance {
            return Err(ExtractionError::invalid_parameter(
                "sampling.min_luminance",
                format!(
                    "{} (must be below max_luminance {})",
                    self.sampling.min_luminance, self.sampling.max_luminance
                ),
            ));
        }
        if self.clustering.max_iterations == 0 {
            return Err(ExtractionError::invalid_parameter(
                "clustering.max_iterations",
                self.clustering.max_iterations,
            ));
        }
        if !(self.palette.dedup_threshold >= 0.0) {
            return Err(ExtractionError::invalid_parameter(
                "palette.dedup_threshold",
                self.palette.dedup_threshold,
            ));
        }
        if self.palette.min_swatches == 0 || self.palette.min_swatches > self.palette.max_swatches {
            return Err(ExtractionError::invalid_parameter(
                "palette.min_swatches",
                format!(
                    "{} (max_swatches is {})",
                    self.palette.min_swatches, self.palette.max_swatches
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_dimension, 900);
        assert_eq!(config.sampling.max_samples, 14_000);
        assert_eq!(config.sampling.min_alpha, 20);
        assert_eq!(config.sampling.min_luminance, 3.0);
        assert_eq!(config.sampling.max_luminance, 252.0);
        assert_eq!(config.sampling.min_sample_points, 50);
        assert_eq!(config.clustering.seed, 42);
        assert_eq!(config.palette.dedup_threshold, 12.0);
        assert_eq!(config.palette.min_swatches, 3);
        assert_eq!(config.palette.max_swatches, 12);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ExtractorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ExtractorConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.max_dimension, config.max_dimension);
        assert_eq!(parsed.sampling.max_samples, config.sampling.max_samples);
        assert_eq!(parsed.clustering.seed, config.clustering.seed);
        assert_eq!(
            parsed.palette.dedup_threshold,
            config.palette.dedup_threshold
        );
    }

    #[test]
    fn test_validate_rejects_inverted_luminance() {
        let mut config = ExtractorConfig::default();
        config.sampling.min_luminance = 253.0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidParameter { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let mut config = ExtractorConfig::default();
        config.sampling.max_samples = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_swatch_range() {
        let mut config = ExtractorConfig::default();
        config.palette.min_swatches = 13;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_threshold() {
        let mut config = ExtractorConfig::default();
        config.palette.dedup_threshold = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = std::env::temp_dir();
        let path = dir.join("pixel_palette_config_test.json");

        let config = ExtractorConfig::default();
        config.to_json_file(&path).unwrap();
        let loaded = ExtractorConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.sampling.max_samples, config.sampling.max_samples);
        assert_eq!(loaded.clustering.seed, config.clustering.seed);
    }

    #[test]
    fn test_missing_file_is_invalid_parameter() {
        let err =
            ExtractorConfig::from_json_file(Path::new("definitely_missing_config.json"))
                .unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidParameter { .. }));
    }
}
