//! Path management for Spendable
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDABLE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendable` or `~/.config/spendable`
//! 3. Windows: `%APPDATA%\spendable`

use std::path::PathBuf;

use crate::error::{SpendableError, SpendableResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPENDABLE_DATA_DIR";

/// Every on-disk location Spendable uses
#[derive(Debug, Clone)]
pub struct SpendablePaths {
    base_dir: PathBuf,
}

impl SpendablePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application-data directory can be
    /// determined.
    pub fn new() -> SpendableResult<Self> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the entity files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// The budget configuration record
    pub fn config_file(&self) -> PathBuf {
        self.data_dir().join("config.json")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    pub fn infusions_file(&self) -> PathBuf {
        self.data_dir().join("infusions.json")
    }

    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> SpendableResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendableError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendableError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether a budget has been set up here
    pub fn is_initialized(&self) -> bool {
        self.config_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> SpendableResult<PathBuf> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SpendableError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("spendable"))
}

#[cfg(windows)]
fn resolve_default_path() -> SpendableResult<PathBuf> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendableError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendable"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
    }

    #[test]
    fn test_entity_files_live_in_data_dir() {
        let paths = SpendablePaths::with_base_dir(PathBuf::from("/srv/spendable"));
        let data = PathBuf::from("/srv/spendable/data");

        assert_eq!(paths.config_file(), data.join("config.json"));
        assert_eq!(paths.expenses_file(), data.join("expenses.json"));
        assert_eq!(paths.infusions_file(), data.join("infusions.json"));
        assert_eq!(paths.goals_file(), data.join("goals.json"));
        assert_eq!(paths.audit_log(), PathBuf::from("/srv/spendable/audit.log"));
    }

    #[test]
    fn test_ensure_directories_and_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendablePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());

        std::fs::write(paths.config_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
