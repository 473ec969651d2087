//! Error types for validation, image I/O and the restart policy
//!
//! Contradictions met while solving are not errors: they are answered by a restart
//! inside the solver and never reach the caller.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Example data doesn't meet algorithm requirements
    ///
    /// Raised for empty example grids and images too small to hold one tile.
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile index exceeds available tile set
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles available
        max_tiles: usize,
    },

    /// A configured restart ceiling was reached before a full collapse
    ///
    /// Only possible when a maximum restart count is set; by default the solver
    /// retries without bound.
    RestartLimitExceeded {
        /// Number of solve attempts made
        attempts: usize,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds ({max_tiles} tiles)")
            }
            Self::RestartLimitExceeded { attempts } => {
                write!(
                    f,
                    "Wave did not collapse without contradiction after {attempts} attempts"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
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
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a zero dimension before any work is done
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidParameter`] naming `parameter` when `value` is zero
pub fn require_positive(parameter: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        Err(invalid_parameter(parameter, &value, &"must be greater than zero"))
    } else {
        Ok(value)
    }
}
