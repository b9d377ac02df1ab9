//! One full survey run: scan, aggregate, coverage.
//!
//! ```text
//! screenshots/ ──scan──▶ records ──aggregate──▶ summaries, corpus
//!                           │
//!                           └── page keys ──┐
//! document ──page count─────────────────────┴──coverage──▶ coverage rows
//! ```
//!
//! The result is a plain in-memory [`Survey`]. Rendering and persistence
//! are left to the caller; the CLI serializes it to JSON.

use crate::aggregate;
use crate::config::SurveyConfig;
use crate::coverage;
use crate::imaging::{HeaderDecoder, RustBackend};
use crate::scan::{ScanError, Scanner};
use crate::types::{CorpusStats, CoverageRow, ImageRecord, PageCount, PageSummary};
use serde::Serialize;

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Survey {
    pub total_pages: PageCount,
    pub records: Vec<ImageRecord>,
    pub summaries: Vec<PageSummary>,
    pub corpus: CorpusStats,
    /// Empty when `total_pages` is unknown.
    pub coverage: Vec<CoverageRow>,
}

/// Run a survey with the `image`-crate decoder.
pub fn run(config: &SurveyConfig, total_pages: PageCount) -> Result<Survey, ScanError> {
    run_with_decoder(config, total_pages, RustBackend::new())
}

/// Run a survey with a given header decoder.
pub fn run_with_decoder(
    config: &SurveyConfig,
    total_pages: PageCount,
    decoder: impl HeaderDecoder,
) -> Result<Survey, ScanError> {
    let records = Scanner::new(config, decoder).scan()?;
    if records.is_empty() {
        log::warn!("no images found in {}", config.screenshots_dir.display());
    }

    Ok(from_records(records, total_pages))
}

/// Derive summaries, corpus stats and coverage from an existing record set.
pub fn from_records(records: Vec<ImageRecord>, total_pages: PageCount) -> Survey {
    let summaries = aggregate::summarize_pages(&records);
    let corpus = aggregate::corpus_stats(&records);
    let coverage = coverage::analyze(&coverage::present_keys(&records), total_pages);

    Survey {
        total_pages,
        records,
        summaries,
        corpus,
        coverage,
    }
}
