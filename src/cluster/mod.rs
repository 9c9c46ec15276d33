//! Color clustering module
//!
//! This module finds representative colors in a sampled point set. The
//! engine is a replaceable strategy behind the [`ClusterEngine`] trait;
//! the default implementation runs seeded k-means.

pub mod engine;
pub mod normalize;

pub use engine::{Centroid, ClusterEngine, KmeansEngine};
pub use normalize::normalize_centroids;
