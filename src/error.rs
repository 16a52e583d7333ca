//! Error types for page fitting

use std::path::PathBuf;

use thiserror::Error;

/// Result type for page fitting operations
pub type Result<T> = std::result::Result<T, PageFitError>;

/// Error types for page fitting, file I/O and rendering
#[derive(Error, Debug)]
pub enum PageFitError {
    /// A parameter or input value is outside its valid range
    #[error("invalid {param}: {reason}")]
    InvalidInput { param: &'static str, reason: String },

    /// Bounding box requested for an empty point set
    #[error("cannot compute bounds of an empty point set")]
    EmptyInput,

    /// A page centred on the coordinate would not contain it
    #[error("coordinate {index} ({x}, {y}) cannot be covered by any page placement")]
    DegenerateCoverage { index: usize, x: f64, y: f64 },

    /// File could not be opened, created or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Write to a caller-supplied output failed
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    /// Malformed line in a coordinate or result file
    #[error("line {line}: {reason}")]
    Parse { line: u64, reason: String },

    /// Delimited reader or writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Animation encoding failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl PageFitError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        PageFitError::InvalidInput {
            param,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PageFitError::Io {
            path: path.into(),
            source,
        }
    }
}
