//! Error types for indexing, matching and image output

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to decode an image from the filesystem
    ///
    /// Recoverable when raised for a single candidate (the candidate is dropped),
    /// fatal when raised for the target image.
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// The image codec panicked while decoding or resizing one candidate
    DecodePanicked {
        /// Path to the candidate being indexed
        path: PathBuf,
        /// Panic payload, if it carried a message
        message: String,
    },

    /// Two results arrived for the same candidate path
    DuplicateCandidate {
        /// Path that was already in the pool
        path: PathBuf,
    },

    /// No candidate survived indexing, so no cell can be filled
    EmptyPool {
        /// Number of candidate paths handed to the indexer
        attempted: usize,
        /// Number of candidates dropped because they failed to decode
        skipped: usize,
    },

    /// Configuration validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the finished mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

    /// A pipeline thread panicked before handing back its results
    WorkerPanicked {
        /// Which pipeline role the thread was playing
        role: &'static str,
    },
}

impl MosaicError {
    /// Whether the failure only concerns a single candidate
    ///
    /// Per-item failures are absorbed by the indexer; everything else ends the run.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ImageLoad { .. } | Self::DecodePanicked { .. } | Self::DuplicateCandidate { .. }
        )
    }

    /// Candidate file a per-item failure refers to
    pub fn candidate_path(&self) -> Option<&Path> {
        match self {
            Self::ImageLoad { path, .. }
            | Self::DecodePanicked { path, .. }
            | Self::DuplicateCandidate { path } => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DecodePanicked { path, message } => {
                write!(f, "Codec panicked on '{}': {message}", path.display())
            }
            Self::DuplicateCandidate { path } => {
                write!(f, "Candidate '{}' was already indexed", path.display())
            }
            Self::EmptyPool { attempted, skipped } => {
                write!(
                    f,
                    "No usable candidate images ({attempted} attempted, {skipped} skipped)"
                )
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
            Self::WorkerPanicked { role } => {
                write!(f, "Pipeline {role} thread panicked")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Attaches the offending path to codec and filesystem errors
pub trait WithPath<T> {
    /// Convert a decode failure into [`MosaicError::ImageLoad`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_load_path(self, path: &Path) -> Result<T>;

    /// Convert an encode failure into [`MosaicError::ImageExport`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_export_path(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, image::ImageError> {
    fn with_load_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    fn with_export_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
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
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
