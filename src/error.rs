//! Error types for the pixel_palette library

use thiserror::Error;

/// Result type alias for palette extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for the palette extraction pipeline
///
/// All pipeline errors are terminal for the extraction call: no partial
/// palette is ever returned. Whether to retry with a different image is
/// the caller's decision.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Image bytes could not be decoded
    #[error("Failed to read image: {message}")]
    UnreadableImage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Too few pixels survived sampling filters for clustering to be meaningful
    #[error("Insufficient color information: {found} usable pixels (minimum {required})")]
    InsufficientColorData { found: usize, required: usize },

    /// No valid cluster center survived normalization
    #[error("Clustering failed: {reason}")]
    ClusteringFailed { reason: String },

    /// Invalid configuration or input parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl ExtractionError {
    /// Create an unreadable-image error with a source error attached
    pub fn unreadable_image<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::UnreadableImage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error can be fixed without choosing a different image
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtractionError::InvalidParameter { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::UnreadableImage { .. } => {
                "Could not read that image. Please upload a PNG, JPG, or WEBP file.".to_string()
            }
            ExtractionError::InsufficientColorData { .. } => {
                "Not enough color information in that image. Please try an image with more visible content.".to_string()
            }
            ExtractionError::ClusteringFailed { .. } => {
                "Palette extraction failed. Please try with a different image.".to_string()
            }
            ExtractionError::InvalidParameter { parameter, .. } => {
                format!("The setting \"{}\" has an invalid value.", parameter)
            }
        }
    }
}
