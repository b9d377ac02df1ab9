//! Page-folder naming convention.
//!
//! Screenshot folders are named after the document page they belong to.
//! Both padded (`01`, `007`) and bare (`1`, `7`) names are accepted, and
//! both map to the same canonical key:
//!
//! - `"1"` → `"01"`
//! - `"07"` → `"07"`
//! - `"123"` → `"123"` (wider than two digits is kept as is)
//!
//! Any Unicode decimal digit counts, not only ASCII: `"١٢"` (Arabic-Indic)
//! maps to `"12"` and `"１"` (fullwidth) to `"01"`. Keys are always written
//! with ASCII digits.
//!
//! Canonical keys are zero-padded to two digits so they sort in page order
//! for documents of up to 99 pages. Past that, keys sort as plain strings
//! (`"100"` before `"11"`); callers that need numeric order must sort on
//! their own.

use regex::Regex;
use std::sync::OnceLock;

/// Page key given to images that sit directly in the scan root.
pub const OTHER_PAGE_KEY: &str = "otros";

// `\d` is Unicode-aware: it matches every character of category Nd.
static PAGE_FOLDER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static DIGIT_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn page_folder_regex() -> Option<&'static Regex> {
    PAGE_FOLDER_REGEX
        .get_or_init(|| Regex::new(r"^\d{1,3}$").ok())
        .as_ref()
}

fn digit_regex() -> Option<&'static Regex> {
    DIGIT_REGEX.get_or_init(|| Regex::new(r"^\d$").ok()).as_ref()
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    digit_regex().is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// Numeric value of a decimal digit in any script.
///
/// Unicode lays out every Nd range as ten consecutive code points from zero
/// to nine, and adjacent ranges start on their own zero. So the value is
/// the distance to the start of the run of digits `c` sits in, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

/// Whether a directory name denotes a document page: 1 to 3 decimal digits.
pub fn is_page_folder(name: &str) -> bool {
    page_folder_regex().is_some_and(|re| re.is_match(name))
}

/// Canonical page key for a folder name.
///
/// All-digit names are re-formatted from their integer value with at least
/// two ASCII digits. Anything else is returned unchanged.
pub fn canonical_key(name: &str) -> String {
    if name.is_empty() {
        return name.to_string();
    }
    let value = name.chars().try_fold(0u64, |acc, c| {
        let digit = digit_value(c)?;
        acc.checked_mul(10)?.checked_add(u64::from(digit))
    });
    match value {
        Some(n) => page_key(n),
        None => name.to_string(),
    }
}

/// Canonical key for a page number.
pub fn page_key(page: u64) -> String {
    format!("{page:02}")
}
