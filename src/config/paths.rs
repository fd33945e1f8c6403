//! Path management for Tally
//!
//! Provides XDG-compliant path resolution for configuration and the ledger
//! document.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/tally` or `~/.config/tally`
//! 3. Windows: `%APPDATA%\tally`

use std::path::PathBuf;

use crate::error::TallyError;

/// Manages all paths used by Tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// Base directory for all Tally data
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = if let Ok(custom) = std::env::var("TALLY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TallyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/tally/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/tally/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the ledger document
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TallyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TallyError> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("tally"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| TallyError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("tally"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TallyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TallyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("tally"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().join("fresh"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }
}
