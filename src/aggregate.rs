//! Per-page and corpus-wide statistics over a record set.
//!
//! Averages only count records where the averaged field is known. A record
//! with unreadable dimensions still contributes its size to `avg_size`, and
//! a group with no known value for a field gets `None` for that average,
//! never zero.

use crate::types::{CorpusStats, FormatCount, ImageRecord, PageSummary};
use std::collections::{BTreeMap, BTreeSet};

/// One summary per distinct page key, sorted by key as a string.
///
/// Two-digit keys come out in page order. Keys of three digits sort as
/// strings (`"100"` before `"11"`), and the "other" sentinel sorts wherever
/// its text lands.
pub fn summarize_pages(records: &[ImageRecord]) -> Vec<PageSummary> {
    let mut groups: BTreeMap<&str, Vec<&ImageRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.page_key.as_str()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(page_key, group)| summarize(page_key, &group))
        .collect()
}

fn summarize(page_key: &str, group: &[&ImageRecord]) -> PageSummary {
    PageSummary {
        page_key: page_key.to_string(),
        image_count: group.len(),
        avg_size: mean(group.iter().filter_map(|r| r.size_bytes).map(|s| s as f64)),
        avg_width: mean(group.iter().filter_map(|r| r.width).map(f64::from)),
        avg_height: mean(group.iter().filter_map(|r| r.height).map(f64::from)),
        avg_megapixels: mean(group.iter().filter_map(|r| r.megapixels)),
    }
}

/// Statistics across every record, regardless of page.
pub fn corpus_stats(records: &[ImageRecord]) -> CorpusStats {
    let sizes: Vec<u64> = records.iter().filter_map(|r| r.size_bytes).collect();
    let page_keys: BTreeSet<&str> = records.iter().map(|r| r.page_key.as_str()).collect();

    CorpusStats {
        image_count: records.len(),
        page_count: page_keys.len(),
        total_size: (!sizes.is_empty()).then(|| sizes.iter().sum()),
        avg_size: mean(sizes.iter().map(|&s| s as f64)),
        avg_width: mean(known_widths(records).into_iter().map(f64::from)),
        avg_height: mean(known_heights(records).into_iter().map(f64::from)),
        avg_megapixels: mean(records.iter().filter_map(|r| r.megapixels)),
        formats: format_counts(records),
        unknown_dimensions: records
            .iter()
            .filter(|r| r.width.is_none() || r.height.is_none())
            .count(),
    }
}

/// Known widths in record order, for distribution plots.
pub fn known_widths(records: &[ImageRecord]) -> Vec<u32> {
    records.iter().filter_map(|r| r.width).collect()
}

/// Known heights in record order, for distribution plots.
pub fn known_heights(records: &[ImageRecord]) -> Vec<u32> {
    records.iter().filter_map(|r| r.height).collect()
}

/// Image count per format tag, most common first, ties broken by tag.
pub fn format_counts(records: &[ImageRecord]) -> Vec<FormatCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.format.as_str()).or_default() += 1;
    }

    let mut formats: Vec<FormatCount> = counts
        .into_iter()
        .map(|(format, count)| FormatCount {
            format: format.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps the BTreeMap's tag order among equal counts.
    formats.sort_by(|a, b| b.count.cmp(&a.count));
    formats
}

/// Arithmetic mean, `None` for no values.
fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
