//! Error types for colour parsing, argument validation and export
//!
//! Synthesis itself never fails; every error here comes from the boundary
//! where user input is parsed or results are written out.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
#[derive(Debug)]
pub enum CamoError {
    /// Colour string is not `#RRGGBB`
    InvalidColor {
        /// Rejected input
        value: String,
        /// Why the input was rejected
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or write a raster
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

    /// Background render worker is gone or did not answer in time
    Worker {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CamoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Worker { reason } => write!(f, "Render worker error: {reason}"),
        }
    }
}

impl std::error::Error for CamoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for camogen results
pub type Result<T> = std::result::Result<T, CamoError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CamoError {
    CamoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
