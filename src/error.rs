//! Error types for raster surface and export failures.

use thiserror::Error;

/// Errors that can occur while managing the raster surface.
///
/// Gesture-level misuse (commit without begin, undo past the floor, zero-size
/// geometry) never produces an error; those cases degrade to silent no-ops.
/// This type only covers real raster failures: surface allocation, pixel
/// buffer access, and PNG encoding.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to operate on raster surface: {0}")]
    Surface(#[from] cairo::Error),

    #[error("raster pixel data is not accessible: {0}")]
    PixelAccess(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] cairo::IoError),

    #[error("snapshot does not match surface dimensions ({expected} bytes expected, {actual} found)")]
    SnapshotMismatch { expected: usize, actual: usize },

    #[error("invalid color '{0}': expected an RGB hex string like #2a9d8f")]
    InvalidColor(String),
}
