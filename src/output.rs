//! CLI output formatting.
//!
//! Each table has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Page 01 (2 images)
//!     overview.png  PNG  800x600  0.48 MP  12.3 KB
//!     broken.jpg  JPG  unknown  unknown  1.0 KB
//! otros (1 image)
//!     cover.png  PNG  1920x1080  2.07 MP  310.5 KB
//! ```
//!
//! ## Summary
//!
//! ```text
//! Pages
//! 01  2 images  avg 6.7 KB  avg 800x600  avg 0.48 MP
//! otros  1 image  avg 310.5 KB  avg 1920x1080  avg 2.07 MP
//!
//! Corpus
//!     Images: 3 across 2 pages
//!     Total size: 323.8 KB
//!     Average size: 107.9 KB
//!     Average resolution: 1360x840 (1.28 MP)
//!     Formats: PNG 2, JPG 1
//!     Undecodable: 1
//! ```
//!
//! ## Coverage
//!
//! ```text
//! Coverage (2/5 pages)
//! 01 yes
//! 02 no
//! ...
//! Missing: 02, 04, 05
//! ```

use crate::coverage::missing_pages;
use crate::types::{CorpusStats, CoverageRow, ImageRecord, PageCount, PageSummary};

const UNKNOWN: &str = "unknown";

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Human-readable byte size: `512 B`, `12.3 KB`, `4.2 MB`.
fn human_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    if bytes < KB {
        format!("{bytes:.0} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / MB)
    }
}

fn opt_size(bytes: Option<f64>) -> String {
    bytes.map(human_size).unwrap_or_else(|| UNKNOWN.to_string())
}

fn opt_megapixels(mp: Option<f64>) -> String {
    mp.map(|m| format!("{m:.2} MP"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn dimensions(width: Option<f64>, height: Option<f64>) -> String {
    match (width, height) {
        (Some(w), Some(h)) => format!("{w:.0}x{h:.0}"),
        _ => UNKNOWN.to_string(),
    }
}

/// Group heading: `Page 01` for page keys, the bare key otherwise.
fn page_label(page_key: &str) -> String {
    if page_key.bytes().all(|b| b.is_ascii_digit()) && !page_key.is_empty() {
        format!("Page {page_key}")
    } else {
        page_key.to_string()
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Records grouped under a heading per run of equal page keys, in scan order.
pub fn format_scan_output(records: &[ImageRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;

    while start < records.len() {
        let key = &records[start].page_key;
        let end = records[start..]
            .iter()
            .position(|r| &r.page_key != key)
            .map_or(records.len(), |offset| start + offset);

        lines.push(format!(
            "{} ({})",
            page_label(key),
            plural(end - start, "image")
        ));
        for record in &records[start..end] {
            lines.push(format!(
                "{}{}  {}  {}  {}  {}",
                indent(1),
                record.filename,
                record.format,
                dimensions(record.width.map(f64::from), record.height.map(f64::from)),
                opt_megapixels(record.megapixels),
                opt_size(record.size_bytes.map(|s| s as f64)),
            ));
        }
        start = end;
    }

    if lines.is_empty() {
        lines.push("No images found".to_string());
    }
    lines
}

pub fn print_scan_output(records: &[ImageRecord]) {
    for line in format_scan_output(records) {
        println!("{}", line);
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Per-page table followed by corpus-wide statistics.
pub fn format_summary_output(summaries: &[PageSummary], corpus: &CorpusStats) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for s in summaries {
        lines.push(format!(
            "{}  {}  avg {}  avg {}  avg {}",
            s.page_key,
            plural(s.image_count, "image"),
            opt_size(s.avg_size),
            dimensions(s.avg_width, s.avg_height),
            opt_megapixels(s.avg_megapixels),
        ));
    }

    lines.push(String::new());
    lines.push("Corpus".to_string());
    lines.push(format!(
        "{}Images: {} across {}",
        indent(1),
        corpus.image_count,
        plural(corpus.page_count, "page")
    ));
    lines.push(format!(
        "{}Total size: {}",
        indent(1),
        opt_size(corpus.total_size.map(|s| s as f64))
    ));
    lines.push(format!(
        "{}Average size: {}",
        indent(1),
        opt_size(corpus.avg_size)
    ));
    lines.push(format!(
        "{}Average resolution: {} ({})",
        indent(1),
        dimensions(corpus.avg_width, corpus.avg_height),
        opt_megapixels(corpus.avg_megapixels)
    ));
    if !corpus.formats.is_empty() {
        let formats: Vec<String> = corpus
            .formats
            .iter()
            .map(|f| format!("{} {}", f.format, f.count))
            .collect();
        lines.push(format!("{}Formats: {}", indent(1), formats.join(", ")));
    }
    if corpus.unknown_dimensions > 0 {
        lines.push(format!(
            "{}Undecodable: {}",
            indent(1),
            corpus.unknown_dimensions
        ));
    }
    lines
}

pub fn print_summary_output(summaries: &[PageSummary], corpus: &CorpusStats) {
    for line in format_summary_output(summaries, corpus) {
        println!("{}", line);
    }
}

// ============================================================================
// Coverage
// ============================================================================

/// One line per document page, then the list of pages without screenshots.
pub fn format_coverage_output(rows: &[CoverageRow], total_pages: PageCount) -> Vec<String> {
    if total_pages.known().is_none() {
        return vec!["Coverage skipped: page count unknown".to_string()];
    }

    let covered = rows.iter().filter(|r| r.has_screenshots).count();
    let mut lines = vec![format!("Coverage ({}/{} pages)", covered, rows.len())];
    for row in rows {
        let mark = if row.has_screenshots { "yes" } else { "no" };
        lines.push(format!("{} {}", row.page_key, mark));
    }

    let missing = missing_pages(rows);
    if missing.is_empty() {
        lines.push("Missing: none".to_string());
    } else {
        lines.push(format!("Missing: {}", missing.join(", ")));
    }
    lines
}

pub fn print_coverage_output(rows: &[CoverageRow], total_pages: PageCount) {
    for line in format_coverage_output(rows, total_pages) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{corpus_stats, summarize_pages};
    use crate::coverage::analyze;
    use crate::test_helpers::record;
    use std::collections::BTreeSet;

    #[test]
    fn human_size_units() {
        assert_eq!(human_size(512.0), "512 B");
        assert_eq!(human_size(2048.0), "2.0 KB");
        assert_eq!(human_size(3.5 * 1024.0 * 1024.0), "3.5 MB");
    }

    #[test]
    fn scan_output_groups_runs_of_page_keys() {
        let records = vec![
            record("01", "a.png", Some(2048), Some((800, 600))),
            record("01", "b.jpg", Some(100), None),
            record("otros", "cover.png", None, Some((10, 10))),
        ];
        let lines = format_scan_output(&records);
        assert_eq!(
            lines,
            vec![
                "Page 01 (2 images)",
                "    a.png  PNG  800x600  0.48 MP  2.0 KB",
                "    b.jpg  PNG  unknown  unknown  100 B",
                "otros (1 image)",
                "    cover.png  PNG  10x10  0.00 MP  unknown",
            ]
        );
    }

    #[test]
    fn scan_output_for_empty_corpus() {
        assert_eq!(format_scan_output(&[]), vec!["No images found"]);
    }

    #[test]
    fn summary_output_lists_pages_then_corpus() {
        let records = vec![
            record("01", "a.png", Some(1024), Some((800, 600))),
            record("02", "b.png", None, None),
        ];
        let lines = format_summary_output(&summarize_pages(&records), &corpus_stats(&records));

        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "01  1 image  avg 1.0 KB  avg 800x600  avg 0.48 MP");
        assert_eq!(lines[2], "02  1 image  avg unknown  avg unknown  avg unknown");
        assert!(lines.contains(&"Corpus".to_string()));
        assert!(lines.contains(&"    Images: 2 across 2 pages".to_string()));
        assert!(lines.contains(&"    Formats: PNG 2".to_string()));
        assert!(lines.contains(&"    Undecodable: 1".to_string()));
    }

    #[test]
    fn coverage_output_lists_missing_pages() {
        let present: BTreeSet<&str> = ["01", "03"].into_iter().collect();
        let rows = analyze(&present, PageCount::Known(3));
        let lines = format_coverage_output(&rows, PageCount::Known(3));
        assert_eq!(
            lines,
            vec!["Coverage (2/3 pages)", "01 yes", "02 no", "03 yes", "Missing: 02"]
        );
    }

    #[test]
    fn coverage_output_when_unknown() {
        assert_eq!(
            format_coverage_output(&[], PageCount::Unknown),
            vec!["Coverage skipped: page count unknown"]
        );
    }
}
