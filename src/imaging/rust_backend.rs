//! Pure Rust header decoder built on the `image` crate.
//!
//! The format is sniffed from the file's magic bytes, falling back to the
//! extension when the bytes are not recognized. Dimensions come from the
//! decoder's header parse; no pixel buffer is allocated.

use super::backend::{DecodeError, HeaderDecoder, ImageHeader};
use image::{ImageFormat, ImageReader};
use std::path::Path;

/// Header decoder using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase tag for a decoded format, matching the names photo tools print.
fn format_tag(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}

impl HeaderDecoder for RustBackend {
    fn decode_header(&self, path: &Path) -> Result<ImageHeader, DecodeError> {
        // The reader owns the file handle; it is dropped on every return below.
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader
            .format()
            .ok_or_else(|| DecodeError::UnknownFormat(path.display().to_string()))?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| DecodeError::Malformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(ImageHeader {
            width,
            height,
            format: format_tag(format),
        })
    }
}
