//! # page-shots
//!
//! Survey a folder of screenshots taken from a reference document. Each
//! document page gets a folder named after its page number; the survey
//! records every image, summarizes them per page, and reports which pages
//! have no screenshots at all.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan       screenshots/  →  image records     (filesystem → structured data)
//! 2. Aggregate  records       →  per-page summary + corpus statistics
//! 3. Coverage   page keys + document page count  →  one row per page
//! ```
//!
//! Each stage after the scan is a pure function of the record set, so it
//! can be tested without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Page-folder detection and canonical page keys (`"1"` → `"01"`) |
//! | [`imaging`] | Header-only decoding: width, height, format |
//! | [`metadata`] | Per-file extraction that degrades to unknown instead of failing |
//! | [`scan`] | Walks the screenshot tree and produces ordered [`types::ImageRecord`]s |
//! | [`aggregate`] | Per-page [`types::PageSummary`] rows and corpus-wide stats |
//! | [`coverage`] | Pages of the document with and without screenshots |
//! | [`document`] | Page count of the reference PDF |
//! | [`survey`] | Runs all stages and bundles the results |
//! | [`config`] | `page-shots.toml` loading, merging and validation |
//! | [`types`] | Shared data model |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Unknown Is Not Zero
//!
//! Any field that could not be read is `None`. Averages are taken only over
//! known values, and an average with no known inputs is `None` itself. A
//! corrupt image therefore never drags a page's mean resolution toward zero,
//! and never disappears from the image count either.
//!
//! ## Nothing Is Dropped
//!
//! Every file with an image extension in a page folder or in the scan root
//! becomes exactly one record, whatever happens when reading it. Only an
//! unreadable scan root stops a run; a missing one just yields an empty
//! survey with a warning.
//!
//! ## Deterministic Order
//!
//! Directories are listed in file-name order and summaries are sorted by
//! page key, so two runs over the same tree produce identical output.

pub mod aggregate;
pub mod config;
pub mod coverage;
pub mod document;
pub mod imaging;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod survey;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
