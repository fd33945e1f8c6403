//! User settings for Tally
//!
//! Display preferences and an optional override of where the ledger
//! document lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;

/// User settings for Tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger document location, if not the default one under the data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            ledger_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TallyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Where the ledger document lives for these settings
    ///
    /// A relative override is taken relative to the base directory.
    pub fn ledger_path(&self, paths: &TallyPaths) -> PathBuf {
        match &self.ledger_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => paths.base_dir().join(file),
            None => paths.ledger_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "R$");
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            ledger_file: Some(PathBuf::from("elsewhere.json")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{}").unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_invalid_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }

    #[test]
    fn test_ledger_path_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.ledger_path(&paths), paths.ledger_file());

        settings.ledger_file = Some(PathBuf::from("custom.json"));
        assert_eq!(
            settings.ledger_path(&paths),
            temp_dir.path().join("custom.json")
        );

        let absolute = temp_dir.path().join("abs").join("ledger.json");
        settings.ledger_file = Some(absolute.clone());
        assert_eq!(settings.ledger_path(&paths), absolute);
    }
}
