//! User settings for Spendable
//!
//! Display preferences and the defaults used when creating a budget.
//! Every field has a serde default so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::SpendablePaths;
use crate::error::{SpendableError, SpendableResult};
use crate::models::WeekStart;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for dates in listings
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Week-start day offered when none is given on the command line
    #[serde(default)]
    pub default_week_start: WeekStart,

    /// `tracing` filter used when `SPENDABLE_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "spendable=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_week_start: WeekStart::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] for that.
    pub fn load_or_create(paths: &SpendablePaths) -> SpendableResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SpendableError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SpendableError::Config(format!("Failed to parse settings file: {}", e)))
    }

    pub fn save(&self, paths: &SpendablePaths) -> SpendableResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendableError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendableError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.default_week_start, WeekStart::MONDAY);
        assert_eq!(settings.log_filter, "spendable=warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            default_week_start: WeekStart::SUNDAY,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_week_start, WeekStart::SUNDAY);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_week_start": 7}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_week_start, WeekStart::SUNDAY);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.schema_version, 1);
    }

    #[test]
    fn test_garbage_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SpendableError::Config(_)));
    }
}
