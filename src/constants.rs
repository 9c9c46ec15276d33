//! Tuned defaults for the palette extraction pipeline
//!
//! These values come from tuning against real uploads rather than from a
//! derivation; they are exposed as configurable defaults through
//! [`crate::config`] rather than hard-coded invariants.

/// Pixel sampling parameters
pub mod sampling {
    /// Maximum number of pixels sampled from a downscaled image
    pub const MAX_SAMPLES: usize = 14_000;

    /// Alpha values below this are treated as transparent background
    pub const MIN_ALPHA: u8 = 20;

    /// Mean luminance `(r+g+b)/3` below this is treated as black bleed
    pub const MIN_LUMINANCE: f32 = 3.0;

    /// Mean luminance above this is treated as white background
    pub const MAX_LUMINANCE: f32 = 252.0;

    /// Minimum surviving sample points for clustering to be meaningful
    pub const MIN_SAMPLE_POINTS: usize = 50;
}

/// K-means clustering parameters
pub mod clustering {
    /// Fixed seed so identical inputs always produce identical centers
    pub const SEED: u64 = 42;

    /// Maximum Lloyd's iterations per run
    pub const MAX_ITERATIONS: usize = 20;

    /// Convergence threshold on the per-iteration score delta
    /// (clustering runs on unit-scale sRGB components)
    pub const CONVERGENCE: f32 = 1e-4;
}

/// Palette assembly parameters
pub mod palette {
    /// RGB Euclidean distance below which two colors are visual duplicates
    pub const DEDUP_THRESHOLD: f32 = 12.0;

    /// Minimum swatch count a caller may request
    pub const MIN_SWATCHES: usize = 3;

    /// Maximum swatch count a caller may request
    pub const MAX_SWATCHES: usize = 12;

    /// Swatch count used when a caller expresses no preference
    pub const DEFAULT_SWATCH_COUNT: usize = 6;
}

/// Image preprocessing parameters
pub mod processing {
    /// Longest image dimension after downscaling, in pixels
    pub const MAX_DIMENSION: u32 = 900;
}
