//! Screenshot tree scanning.
//!
//! Walks the scan root and produces one [`ImageRecord`] per image file.
//!
//! ## Directory Structure
//!
//! ```text
//! screenshots/                 # Scan root
//! ├── 01/                      # Page folder → key "01"
//! │   ├── overview.png
//! │   └── detail.jpg
//! ├── 2/                       # Bare numbers work too → key "02"
//! │   └── shot.PNG
//! ├── 123/                     # Up to three digits → key "123"
//! │   └── late.jpeg
//! ├── 1000/                    # Four digits: not a page, ignored
//! ├── notes/                   # Not a page, ignored
//! ├── cover.png                # Loose image → key "otros"
//! └── readme.txt               # Not an image, ignored
//! ```
//!
//! Only the root and the page folders are listed; nothing deeper is visited.
//!
//! ## Ordering
//!
//! Both levels are listed in file-name order, so two scans of an unchanged
//! tree give the same record sequence.
//!
//! ## Failures
//!
//! - Missing root, or root that is not a directory: warning, empty result.
//! - Root that exists but cannot be read: [`ScanError`].
//! - Page folder that cannot be listed: warning, folder skipped.
//! - Unreadable or corrupt image: record kept with unknown fields
//!   (see [`metadata`](crate::metadata)).

use crate::config::SurveyConfig;
use crate::imaging::{HeaderDecoder, RustBackend};
use crate::metadata;
use crate::naming::{canonical_key, is_page_folder};
use crate::types::ImageRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error on scan root {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot list scan root: {0}")]
    Listing(#[from] walkdir::Error),
}

/// Scans one screenshot tree with a given header decoder.
pub struct Scanner<'a, D> {
    config: &'a SurveyConfig,
    decoder: D,
}

impl<'a, D: HeaderDecoder> Scanner<'a, D> {
    pub fn new(config: &'a SurveyConfig, decoder: D) -> Self {
        Self { config, decoder }
    }

    /// Produce the ordered record set for the configured root.
    pub fn scan(&self) -> Result<Vec<ImageRecord>, ScanError> {
        let root = &self.config.screenshots_dir;

        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                log::warn!("scan root is not a directory: {}", root.display());
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("scan root does not exist: {}", root.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(ScanError::Root {
                    path: root.clone(),
                    source,
                });
            }
        }

        let mut records = Vec::new();
        let mut page_folders = 0usize;

        for entry in list_dir(root)? {
            if entry.is_dir() {
                let name = file_name(&entry);
                if is_page_folder(&name) {
                    page_folders += 1;
                    self.scan_page_folder(&entry, &canonical_key(&name), &mut records);
                }
            } else if self.config.is_image_path(&entry) {
                records.push(self.build_record(&entry, &self.config.other_key));
            }
        }

        log::info!(
            "scanned {}: {} images in {} page folders",
            root.display(),
            records.len(),
            page_folders
        );
        Ok(records)
    }

    fn scan_page_folder(&self, dir: &Path, page_key: &str, records: &mut Vec<ImageRecord>) {
        let entries = match list_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("skipping unreadable page folder {}: {e}", dir.display());
                return;
            }
        };

        for entry in entries {
            if !entry.is_dir() && self.config.is_image_path(&entry) {
                records.push(self.build_record(&entry, page_key));
            }
        }
    }

    fn build_record(&self, path: &Path, page_key: &str) -> ImageRecord {
        let meta = metadata::extract(&self.decoder, path);
        ImageRecord {
            page_key: page_key.to_string(),
            filename: file_name(path),
            format: meta.format,
            size_bytes: meta.size_bytes,
            width: meta.width,
            height: meta.height,
            megapixels: meta.megapixels,
            path: path.display().to_string(),
        }
    }
}

/// Scan the configured root with the `image`-crate decoder.
pub fn scan(config: &SurveyConfig) -> Result<Vec<ImageRecord>, ScanError> {
    Scanner::new(config, RustBackend::new()).scan()
}

/// Immediate children of `dir`, sorted by file name.
fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map(walkdir::DirEntry::into_path))
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
