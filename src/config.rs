//! Survey configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Stock defaults ([`SurveyConfig::default`])
//! 2. An optional `page-shots.toml` file
//! 3. Command-line flags (applied by the binary)
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! screenshots_dir = "screenshots"      # Root holding the 01/, 02/, ... page folders
//! # document = "reference.pdf"         # Document whose pages the folders follow
//! output_dir = "survey-output"         # Where `report` writes survey.json
//! extensions = ["png", "jpg", "jpeg"]  # Image extensions, matched case-insensitively
//! other_key = "otros"                  # Page key for images outside page folders
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::OTHER_PAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILENAME: &str = "page-shots.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a survey run needs to know, passed explicitly to the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyConfig {
    /// Scan root. Its digit-named children are page folders.
    pub screenshots_dir: PathBuf,
    /// Reference document for the page count. No coverage without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
    /// Directory the `report` command writes into.
    pub output_dir: PathBuf,
    /// Image file extensions without the dot.
    pub extensions: Vec<String>,
    /// Page key for images sitting directly in the scan root.
    pub other_key: String,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            screenshots_dir: PathBuf::from("screenshots"),
            document: None,
            output_dir: PathBuf::from("survey-output"),
            extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
            other_key: OTHER_PAGE_KEY.to_string(),
        }
    }
}

impl SurveyConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation("extensions must not be empty".into()));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "extensions entries must be non-empty and without a leading dot, got {bad:?}"
            )));
        }
        if self.other_key.is_empty() {
            return Err(ConfigError::Validation("other_key must not be empty".into()));
        }
        Ok(())
    }

    /// Whether a file name ends in `.` plus one of the configured extensions.
    ///
    /// A name that is only the suffix (`.png`) counts too.
    pub fn is_image_path(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext.to_lowercase())))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SurveyConfig::default())?)
}

/// Lay the keys of `overlay` over `base`.
///
/// The config is one flat table: each overlay key replaces the base value
/// outright, and base keys absent from the overlay are kept.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                base_table.insert(key, value);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SurveyConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SurveyConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file, falling back to defaults if it is absent.
pub fn load_config(path: &Path) -> Result<SurveyConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    if overlay.is_none() {
        log::debug!("no config at {}, using defaults", path.display());
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# page-shots configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Root directory holding one folder per document page.
# Folders named with 1 to 3 digits ("1", "01", "123") are page folders;
# other folders are ignored.
screenshots_dir = "screenshots"

# Reference document (PDF). Its page count drives the coverage report.
# Leave unset to skip coverage.
# document = "reference.pdf"

# Where the `report` command writes survey.json.
output_dir = "survey-output"

# Image extensions to pick up, without the dot. Case-insensitive.
extensions = ["png", "jpg", "jpeg"]

# Page key given to images found directly in screenshots_dir.
other_key = "otros"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Defaults and validation
    // =========================================================================

    #[test]
    fn default_config_values() {
        let config = SurveyConfig::default();
        assert_eq!(config.screenshots_dir, PathBuf::from("screenshots"));
        assert_eq!(config.document, None);
        assert_eq!(config.extensions, vec!["png", "jpg", "jpeg"]);
        assert_eq!(config.other_key, "otros");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_extensions_rejected() {
        let config = SurveyConfig {
            extensions: vec![],
            ..SurveyConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn dotted_extension_rejected() {
        let config = SurveyConfig {
            extensions: vec![".png".to_string()],
            ..SurveyConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_other_key_rejected() {
        let config = SurveyConfig {
            other_key: String::new(),
            ..SurveyConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn image_paths_match_case_insensitively() {
        let config = SurveyConfig::default();
        assert!(config.is_image_path(Path::new("a.png")));
        assert!(config.is_image_path(Path::new("a.PNG")));
        assert!(config.is_image_path(Path::new("a.JpEg")));
        assert!(config.is_image_path(Path::new("dir/a.jpg")));
        assert!(!config.is_image_path(Path::new("a.gif")));
        assert!(!config.is_image_path(Path::new("a.png.txt")));
        assert!(!config.is_image_path(Path::new("png")));
    }

    #[test]
    fn bare_suffix_name_is_an_image() {
        let config = SurveyConfig::default();
        assert!(config.is_image_path(Path::new(".png")));
        assert!(config.is_image_path(Path::new("shots/.JPG")));
        assert!(!config.is_image_path(Path::new(".txt")));
    }

    // =========================================================================
    // Loading and merging
    // =========================================================================

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, SurveyConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"
screenshots_dir = "/data/VIEW SCREENSHOTS"
document = "/data/building.pdf"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.screenshots_dir, PathBuf::from("/data/VIEW SCREENSHOTS"));
        assert_eq!(config.document, Some(PathBuf::from("/data/building.pdf")));
        assert_eq!(config.extensions, vec!["png", "jpg", "jpeg"]);
        assert_eq!(config.output_dir, PathBuf::from("survey-output"));
    }

    #[test]
    fn unknown_key_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "screenshot_dir = \"typo\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "this is not valid toml [[[").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_values_fail_validation_on_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "extensions = []\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn merge_replaces_arrays_wholesale() {
        let base: toml::Value = toml::from_str("extensions = [\"png\", \"jpg\"]").unwrap();
        let overlay: toml::Value = toml::from_str("extensions = [\"webp\"]").unwrap();
        let merged = merge_toml(base, overlay);
        let exts = merged["extensions"].as_array().unwrap();
        assert_eq!(exts.len(), 1);
        assert_eq!(exts[0].as_str(), Some("webp"));
    }

    #[test]
    fn merge_keeps_base_keys_and_replaces_overlaid_ones() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value =
            toml::from_str("other_key = \"misc\"\nscreenshots_dir = \"shots\"").unwrap();
        let merged = merge_toml(base, overlay);

        assert_eq!(merged["other_key"].as_str(), Some("misc"));
        assert_eq!(merged["screenshots_dir"].as_str(), Some("shots"));
        assert_eq!(merged["output_dir"].as_str(), Some("survey-output"));
        assert_eq!(merged["extensions"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SurveyConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SurveyConfig::default());
    }
}
