//! Shared test utilities for the page-shots test suite.
//!
//! Fixtures are built on the fly in a temp directory: real PNG/JPEG files
//! encoded with the `image` crate, and "corrupt" files that carry an image
//! extension but no image data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let page = page_dir(tmp.path(), "01");
//! write_png(&page, "a.png", 800, 600);
//! write_corrupt(&page, "b.jpg");
//!
//! let records = scan_root(tmp.path());
//! assert_eq!(page_keys(&records), vec!["01", "01"]);
//! ```

use std::path::{Path, PathBuf};

use crate::config::SurveyConfig;
use crate::imaging::RustBackend;
use crate::scan::Scanner;
use crate::types::{ImageRecord, PageSummary};

// =========================================================================
// Fixture builders
// =========================================================================

/// Create (if needed) and return a subdirectory of `root`.
pub fn page_dir(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a black RGB PNG of the given size.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

/// Write a black RGB JPEG of the given size.
pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(width, height)
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

/// Write a file with an image name but no decodable content.
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "fake image").unwrap();
    path
}

/// Scan `root` with default config and the real decoder. Panics on fatal errors.
pub fn scan_root(root: &Path) -> Vec<ImageRecord> {
    let config = SurveyConfig {
        screenshots_dir: root.to_path_buf(),
        ..SurveyConfig::default()
    };
    Scanner::new(&config, RustBackend::new())
        .scan()
        .unwrap_or_else(|e| panic!("scan of {} failed: {e}", root.display()))
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Find a record by filename. Panics if not found.
pub fn find_record<'a>(records: &'a [ImageRecord], filename: &str) -> &'a ImageRecord {
    records
        .iter()
        .find(|r| r.filename == filename)
        .unwrap_or_else(|| {
            let names: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
            panic!("record '{filename}' not found. Available: {names:?}")
        })
}

/// Find a summary row by page key. Panics if not found.
pub fn find_summary<'a>(summaries: &'a [PageSummary], page_key: &str) -> &'a PageSummary {
    summaries
        .iter()
        .find(|s| s.page_key == page_key)
        .unwrap_or_else(|| {
            let keys: Vec<&str> = summaries.iter().map(|s| s.page_key.as_str()).collect();
            panic!("summary '{page_key}' not found. Available: {keys:?}")
        })
}

/// Page keys in record order.
pub fn page_keys(records: &[ImageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.page_key.as_str()).collect()
}

/// Filenames in record order.
pub fn filenames(records: &[ImageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.filename.as_str()).collect()
}

/// Build a record directly, for aggregation tests that skip the filesystem.
pub fn record(
    page_key: &str,
    filename: &str,
    size: Option<u64>,
    dims: Option<(u32, u32)>,
) -> ImageRecord {
    let (width, height) = match dims {
        Some((w, h)) => (Some(w), Some(h)),
        None => (None, None),
    };
    ImageRecord {
        page_key: page_key.to_string(),
        filename: filename.to_string(),
        format: "PNG".to_string(),
        size_bytes: size,
        width,
        height,
        megapixels: dims.map(|(w, h)| (w as f64 * h as f64) / 1_000_000.0),
        path: format!("/shots/{page_key}/{filename}"),
    }
}

/// Write a minimal PDF with `pages` empty pages.
pub fn write_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    use lopdf::{Document, Object, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}
