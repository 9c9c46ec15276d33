//! # pixel_palette
//!
//! A Rust crate for extracting an ordered color palette from an image.
//!
//! The pipeline decodes and downscales the image, stride-samples its
//! pixels (dropping transparent and near-white/near-black background),
//! clusters the surviving points with seeded k-means, then de-duplicates
//! and orders the resulting colors by hue for presentation. Identical
//! inputs always produce identical palettes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pixel_palette::extract_palette;
//! use std::path::Path;
//!
//! let palette = extract_palette(Path::new("photo.jpg"), 6)?;
//! for swatch in &palette {
//!     println!("{}  rgb{:?}", swatch.hex(), swatch.rgb());
//! }
//! # Ok::<(), pixel_palette::ExtractionError>(())
//! ```

use std::path::Path;

pub mod cluster;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod sampling;
pub mod session;
pub mod swatch;

pub use cluster::{ClusterEngine, KmeansEngine};
pub use config::ExtractorConfig;
pub use error::{ExtractionError, Result};
pub use sampling::PixelSampler;
pub use swatch::Swatch;

use cluster::normalize_centroids;
use swatch::{dedupe_colors, sort_colors};

/// Extract a color palette from an image file
///
/// `count` is the desired number of swatches, clamped to `[3, 12]`. The
/// returned palette is ordered by hue and holds at most `count` swatches;
/// it can hold fewer when de-duplication collapses similar cluster
/// centers, but never zero.
///
/// # Errors
///
/// - [`ExtractionError::UnreadableImage`] if the file cannot be read or
///   decoded
/// - [`ExtractionError::InsufficientColorData`] if too few pixels survive
///   background filtering
/// - [`ExtractionError::ClusteringFailed`] if no valid cluster center is
///   produced
pub fn extract_palette(path: &Path, count: usize) -> Result<Vec<Swatch>> {
    let img = image_loader::load_from_path(path)?;
    extract_from_image(&img, count, &ExtractorConfig::default(), &KmeansEngine::new())
}

/// Extract a color palette from raw image file bytes
///
/// Same contract as [`extract_palette`], for callers that hold an upload
/// in memory rather than on disk.
pub fn extract_palette_from_bytes(bytes: &[u8], count: usize) -> Result<Vec<Swatch>> {
    let img = image_loader::decode_bytes(bytes)?;
    extract_from_image(&img, count, &ExtractorConfig::default(), &KmeansEngine::new())
}

/// Extract a color palette with explicit configuration and engine
///
/// The engine is a strategy: any [`ClusterEngine`] implementation can be
/// substituted, as long as it is deterministic for identical input and
/// seed.
pub fn extract_palette_with_config(
    bytes: &[u8],
    count: usize,
    config: &ExtractorConfig,
    engine: &dyn ClusterEngine,
) -> Result<Vec<Swatch>> {
    config.validate()?;
    let img = image_loader::decode_bytes(bytes)?;
    extract_from_image(&img, count, config, engine)
}

/// Run the sampling → clustering → assembly pipeline on a decoded image
fn extract_from_image(
    img: &image::DynamicImage,
    count: usize,
    config: &ExtractorConfig,
    engine: &dyn ClusterEngine,
) -> Result<Vec<Swatch>> {
    // 1. Downscale and flatten to RGBA
    let buffer = image_loader::downscale(img, config.max_dimension);

    // 2. Sample content pixels
    let sampler = PixelSampler::from_config(&config.sampling);
    let points = sampler.sample(&buffer);
    if points.len() < config.sampling.min_sample_points {
        return Err(ExtractionError::InsufficientColorData {
            found: points.len(),
            required: config.sampling.min_sample_points,
        });
    }

    // 3. Cluster
    let k = count.clamp(config.palette.min_swatches, config.palette.max_swatches);
    let raw_centroids = engine.cluster(&points, k, config.clustering.seed);

    // 4. Normalize to integer RGB
    let centers = normalize_centroids(&raw_centroids)?;

    // 5. De-duplicate, order, trim
    let deduped = dedupe_colors(&centers, config.palette.dedup_threshold);
    let mut ordered = sort_colors(deduped);
    ordered.truncate(k);

    Ok(ordered.into_iter().map(Swatch::new).collect())
}
