//! Per-file metadata extraction.
//!
//! Every field is read independently and degrades on its own:
//!
//! - **Size**: `stat` of the file. Unreadable → `None`.
//! - **Width / height / format**: header decode through a [`HeaderDecoder`].
//!   On failure the dimensions become `None` and the format falls back to the
//!   file extension, uppercased (`shot.jpg` → `"JPG"`).
//! - **Megapixels**: always computed from width and height, never read
//!   from the file. `None` if either dimension is unknown.
//!
//! [`extract`] never fails. A corrupt or vanished file still yields an
//! [`ImageMetadata`], so one bad image cannot abort a scan.

use crate::imaging::HeaderDecoder;
use std::path::Path;

/// Everything the scanner records about one file, apart from where it lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetadata {
    pub format: String,
    pub size_bytes: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub megapixels: Option<f64>,
}

/// Read size, dimensions and format of one image file.
pub fn extract(decoder: &impl HeaderDecoder, path: &Path) -> ImageMetadata {
    let size_bytes = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(e) => {
            log::debug!("size unknown for {}: {e}", path.display());
            None
        }
    };

    let (width, height, format) = match decoder.decode_header(path) {
        Ok(header) => (Some(header.width), Some(header.height), header.format),
        Err(e) => {
            log::debug!("header unreadable for {}: {e}", path.display());
            (None, None, extension_format(path))
        }
    };

    ImageMetadata {
        format,
        size_bytes,
        width,
        height,
        megapixels: megapixels(width, height),
    }
}

/// Width × height in millions of pixels, when both are known.
pub fn megapixels(width: Option<u32>, height: Option<u32>) -> Option<f64> {
    match (width, height) {
        (Some(w), Some(h)) => Some((w as f64 * h as f64) / 1_000_000.0),
        _ => None,
    }
}

/// Best-effort format label from the file extension: `"a.jpeg"` → `"JPEG"`.
///
/// Empty when the file has no extension.
pub fn extension_format(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
