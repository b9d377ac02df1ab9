//! Shared data model produced by the scan and consumed by aggregation,
//! coverage and reporting.
//!
//! Every field that can be missing is an `Option`. `None` means "unknown":
//! the value could not be read, and aggregation must skip it rather than
//! treat it as zero.

use serde::Serialize;
use std::fmt;

/// One discovered image file.
///
/// Created once per image during a scan pass and never mutated afterwards.
/// A record is emitted even when nothing could be read from the file; the
/// unreadable fields are simply `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRecord {
    /// Canonical page key (`"01"`, `"12"`, `"123"`) or the "other" sentinel.
    pub page_key: String,
    /// Base name of the file.
    pub filename: String,
    /// Uppercase format tag: decoded (`"PNG"`, `"JPEG"`) or from the extension (`"JPG"`).
    pub format: String,
    #[serde(rename = "size")]
    pub size_bytes: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub megapixels: Option<f64>,
    /// Full path, for tracing a row back to its file.
    pub path: String,
}

/// Per-page rollup of [`ImageRecord`]s sharing a `page_key`.
///
/// Each average is taken over the records where that field is known. If no
/// record in the group has the field, the average is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    pub page_key: String,
    pub image_count: usize,
    pub avg_size: Option<f64>,
    pub avg_width: Option<f64>,
    pub avg_height: Option<f64>,
    pub avg_megapixels: Option<f64>,
}

/// Number of images carrying a given format tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatCount {
    pub format: String,
    pub count: usize,
}

/// Statistics over the whole record set, independent of page grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub image_count: usize,
    /// Distinct page keys, the "other" sentinel included.
    pub page_count: usize,
    pub total_size: Option<u64>,
    pub avg_size: Option<f64>,
    pub avg_width: Option<f64>,
    pub avg_height: Option<f64>,
    pub avg_megapixels: Option<f64>,
    /// Sorted by descending count, then by format tag.
    pub formats: Vec<FormatCount>,
    /// Records whose dimensions could not be decoded.
    pub unknown_dimensions: usize,
}

/// Whether one page of the reference document has screenshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageRow {
    pub page_key: String,
    pub has_screenshots: bool,
}

/// Total page count of the reference document, as reported by the
/// document collaborator.
///
/// `Unknown` is a normal outcome: coverage analysis is skipped, nothing
/// is fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCount {
    Known(u32),
    #[default]
    Unknown,
}

impl PageCount {
    /// Interpret a raw count where anything below 1 means "no answer".
    pub fn from_raw(pages: i64) -> Self {
        match u32::try_from(pages) {
            Ok(n) if n >= 1 => PageCount::Known(n),
            _ => PageCount::Unknown,
        }
    }

    pub fn known(self) -> Option<u32> {
        match self {
            PageCount::Known(n) => Some(n),
            PageCount::Unknown => None,
        }
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCount::Known(n) => write!(f, "{n}"),
            PageCount::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for PageCount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.known().serialize(serializer)
    }
}
