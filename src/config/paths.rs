//! Path management for tour-splitter
//!
//! ## Path Resolution Order
//!
//! 1. `TOURSPLIT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/tour-splitter` on Linux,
//!    `~/Library/Application Support/tour-splitter` on macOS,
//!    `%APPDATA%\tour-splitter` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TourError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "TOURSPLIT_DATA_DIR";

/// Manages all paths used by tour-splitter
#[derive(Debug, Clone)]
pub struct TourPaths {
    /// Base directory for all tour-splitter data
    base_dir: PathBuf,
}

impl TourPaths {
    /// Create a new TourPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, TourError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TourPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default directory for export artifacts (`<base>/exports/`)
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to tours.json
    pub fn tours_file(&self) -> PathBuf {
        self.data_dir().join("tours.json")
    }

    /// Get the path to session.json (active tour selection)
    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TourError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TourError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TourError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if tour-splitter has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TourError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| TourError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("tour-splitter"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TourPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = TourPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TourPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TourPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.tours_file(),
            temp_dir.path().join("data").join("tours.json")
        );
        assert_eq!(
            paths.session_file(),
            temp_dir.path().join("data").join("session.json")
        );
    }
}
