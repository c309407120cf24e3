//! Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FillError>;

/// Errors from pixel buffers and image files
///
/// Filling itself never fails
#[derive(Debug, Error)]
pub enum FillError {
    #[error("Buffer holds {len} bytes, {width}x{height} RGBA needs {expected}")]
    BufferSize { len: usize, expected: usize, width: usize, height: usize },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
