//! Error types for image input and output.

use thiserror::Error;

/// Errors that can occur while turning an encoded image into pixels.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Not a data URI: {0}")]
    InvalidDataUri(String),

    #[error("Data URI payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Unsupported image format '{0}'")]
    UnsupportedFormat(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Image I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
