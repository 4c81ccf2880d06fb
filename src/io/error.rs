//! Error types for pipeline operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum PipelineError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// No listed image matches the requested logical set index
    ImageNotFound {
        /// Requested set index
        index: usize,
        /// Directory that was searched
        directory: PathBuf,
    },

    /// Requested grid dimensions are incompatible with the image size
    InvalidPartition {
        /// Requested tile row count
        rows: usize,
        /// Requested tile column count
        cols: usize,
        /// Image height in pixels
        height: usize,
        /// Image width in pixels
        width: usize,
    },

    /// A tile presented to the feature extractor is not a 3-channel image
    InvalidTileShape {
        /// Shape of the offending tile (rows, cols, channels)
        shape: (usize, usize, usize),
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageNotFound { index, directory } => {
                write!(
                    f,
                    "No image matching set index {index} in '{}'",
                    directory.display()
                )
            }
            Self::InvalidPartition {
                rows,
                cols,
                height,
                width,
            } => {
                write!(
                    f,
                    "Cannot partition a {height}x{width} image into a {rows}x{cols} tile grid"
                )
            }
            Self::InvalidTileShape { shape } => {
                write!(
                    f,
                    "Expected a 3-channel tile, got shape {}x{}x{}",
                    shape.0, shape.1, shape.2
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PipelineError>;

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PipelineError {
    PipelineError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a generic I/O error for an invalid target path
pub fn io_error(msg: &str) -> PipelineError {
    PipelineError::FileSystem {
        path: PathBuf::from("<target>"),
        operation: "validate target",
        source: std::io::Error::other(msg.to_string()),
    }
}
