//! Error types for camscope-rs.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for camscope-rs operations.
///
/// Every error is fatal to the pipeline that raised it; nothing in the
/// workspace retries or returns partial results.
#[derive(Error, Debug)]
pub enum CamscopeError {
    /// An input file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An input file exists but its contents could not be interpreted.
    #[error("format error: {0}")]
    Format(String),

    /// The data is well-formed but degenerate (e.g. an all-zero depth image).
    #[error("domain error: {0}")]
    Domain(String),

    /// Buffers with inconsistent element counts.
    #[error("{what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Geometry type other than mesh or point cloud.
    #[error("unsupported geometry type '{0}' (expected 'mesh' or 'point cloud')")]
    UnsupportedGeometryType(String),

    /// A camera-to-world transform that does not preserve the homogeneous coordinate.
    #[error("malformed camera-to-world transform: homogeneous coordinate is {0}")]
    MalformedTransform(f32),

    /// Camera parameters that cannot produce a frustum.
    #[error("invalid camera '{name}': {reason}")]
    InvalidCamera { name: String, reason: String },

    /// A color map with the given name is not registered.
    #[error("color map '{0}' not found")]
    ColorMapNotFound(String),

    /// Image output with an extension we cannot encode.
    #[error("unsupported image format: '{0}'")]
    UnsupportedImageFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Image decode/encode error.
    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl CamscopeError {
    /// Maps an I/O error from opening `path`, turning `NotFound` into [`CamscopeError::FileNotFound`].
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path.into())
        } else {
            Self::IoError(err)
        }
    }
}

/// A specialized Result type for camscope-rs operations.
pub type Result<T> = std::result::Result<T, CamscopeError>;
