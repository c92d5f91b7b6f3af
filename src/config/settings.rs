//! User settings for SpendVista
//!
//! Display preferences: dark mode, currency symbol, date format and the size
//! of the recent-transactions list.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::SpendVistaPaths;
use crate::error::SpendVistaError;

/// User settings for SpendVista
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Dark mode: coloured status output
    #[serde(default)]
    pub dark_mode: bool,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of transactions shown on the dashboard
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dark_mode: false,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_count: default_recent_count(),
        }
    }
}

/// Whether `format` can render a calendar date
///
/// Unknown specifiers and time-of-day fields both fail.
pub fn is_valid_date_format(format: &str) -> bool {
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(format)).is_ok()
}

/// Settings as read from disk, with anything that had to be replaced
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// The file existed but was not valid settings JSON
    pub malformed: bool,
    /// A `date_format` that could not render dates and was reset
    pub rejected_date_format: Option<String>,
}

impl Settings {
    /// Load settings from disk, or fall back to defaults
    ///
    /// A missing or malformed settings file yields the defaults, and an
    /// unusable date format is replaced by the default one. Nothing is
    /// written back until the caller saves.
    pub fn load_or_create(paths: &SpendVistaPaths) -> Result<LoadedSettings, SpendVistaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(LoadedSettings {
                settings: Settings::default(),
                malformed: false,
                rejected_date_format: None,
            });
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SpendVistaError::Io(format!("Failed to read settings file: {}", e)))?;

        let (mut settings, malformed) = match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => (settings, false),
            Err(_) => (Settings::default(), true),
        };

        let rejected_date_format = if is_valid_date_format(&settings.date_format) {
            None
        } else {
            Some(std::mem::replace(
                &mut settings.date_format,
                default_date_format(),
            ))
        };

        Ok(LoadedSettings {
            settings,
            malformed,
            rejected_date_format,
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendVistaPaths) -> Result<(), SpendVistaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendVistaError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendVistaError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert!(!settings.dark_mode);
        assert_eq!(settings.currency_symbol, "R");
        assert_eq!(settings.recent_count, 5);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendVistaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            dark_mode: true,
            currency_symbol: "$".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.settings, settings);
        assert!(!loaded.malformed);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"dark_mode": true}"#).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.recent_count, 5);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendVistaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.settings, Settings::default());
        assert!(loaded.malformed);
    }

    #[test]
    fn test_missing_file_is_not_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendVistaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.settings, Settings::default());
        assert!(!loaded.malformed);
        assert_eq!(loaded.rejected_date_format, None);
    }

    #[test]
    fn test_unusable_date_format_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendVistaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "$", "date_format": "%Q"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.malformed);
        assert_eq!(loaded.rejected_date_format.as_deref(), Some("%Q"));
        assert_eq!(loaded.settings.date_format, "%Y-%m-%d");
        assert_eq!(loaded.settings.currency_symbol, "$");
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(is_valid_date_format("%d %b %Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%H:%M"));
    }
}
