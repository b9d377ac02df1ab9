//! Page count of the reference document.
//!
//! The document is only opened to count its pages. Anything that prevents
//! a count (no path, missing file, unparseable PDF, zero pages) results in
//! [`PageCount::Unknown`], which downstream means "skip coverage".

use crate::types::PageCount;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Failed to read PDF {path}: {source}")]
    Pdf {
        path: String,
        #[source]
        source: lopdf::Error,
    },
}

/// Count the pages of a PDF.
pub fn count_pages(path: &Path) -> Result<u32, DocumentError> {
    if !path.is_file() {
        return Err(DocumentError::NotFound(path.display().to_string()));
    }
    let doc = lopdf::Document::load(path).map_err(|source| DocumentError::Pdf {
        path: path.display().to_string(),
        source,
    })?;
    Ok(u32::try_from(doc.get_pages().len()).unwrap_or(u32::MAX))
}

/// Page count for an optional document, never failing.
pub fn page_count(path: Option<&Path>) -> PageCount {
    let Some(path) = path else {
        log::warn!("no reference document configured; page count unknown");
        return PageCount::Unknown;
    };

    match count_pages(path) {
        Ok(0) => {
            log::warn!("{} has no pages; page count unknown", path.display());
            PageCount::Unknown
        }
        Ok(n) => {
            log::info!("{} has {n} pages", path.display());
            PageCount::Known(n)
        }
        Err(e) => {
            log::warn!("could not determine page count: {e}");
            PageCount::Unknown
        }
    }
}
