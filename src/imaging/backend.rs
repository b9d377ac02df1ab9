//! Header decoding capability and shared types.
//!
//! The [`HeaderDecoder`] trait is the seam between metadata extraction and
//! the codecs. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests swap in a mock
//! that returns scripted headers without touching any codec.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unrecognized image format: {0}")]
    UnknownFormat(String),
    #[error("Failed to decode {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// What an image header tells us without decoding pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    /// Uppercase format tag, e.g. `"PNG"`, `"JPEG"`.
    pub format: String,
}

/// Read width, height and format from an image file's header.
///
/// Implementations must release any file handle before returning, on
/// both the success and the error path.
pub trait HeaderDecoder {
    fn decode_header(&self, path: &Path) -> Result<ImageHeader, DecodeError>;
}

impl<T: HeaderDecoder + ?Sized> HeaderDecoder for &T {
    fn decode_header(&self, path: &Path) -> Result<ImageHeader, DecodeError> {
        (**self).decode_header(path)
    }
}
