//! Which pages of the reference document have screenshots.

use crate::naming::page_key;
use crate::types::{CoverageRow, ImageRecord, PageCount};
use std::collections::BTreeSet;

/// One row per document page `1..=N`, keyed `"01"`, `"02"`, ...
///
/// A page is covered when its canonical key appears in `present`. Keys in
/// `present` that are not document pages (the "other" sentinel, pages past
/// `N`) are ignored. With an unknown page count no rows are produced.
pub fn analyze(present: &BTreeSet<&str>, total_pages: PageCount) -> Vec<CoverageRow> {
    let Some(total) = total_pages.known() else {
        return Vec::new();
    };

    (1..=u64::from(total))
        .map(|page| {
            let key = page_key(page);
            CoverageRow {
                has_screenshots: present.contains(key.as_str()),
                page_key: key,
            }
        })
        .collect()
}

/// Distinct page keys of a record set.
pub fn present_keys(records: &[ImageRecord]) -> BTreeSet<&str> {
    records.iter().map(|r| r.page_key.as_str()).collect()
}

/// Keys of the pages without screenshots, in page order.
pub fn missing_pages(rows: &[CoverageRow]) -> Vec<&str> {
    rows.iter()
        .filter(|r| !r.has_screenshots)
        .map(|r| r.page_key.as_str())
        .collect()
}
