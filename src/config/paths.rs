//! Path management for CardBank
//!
//! Resolves where settings and the account snapshot live.
//!
//! ## Path Resolution Order
//!
//! 1. `CARDBANK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/cardbank` on Linux,
//!    `~/Library/Application Support/cardbank` on macOS, `%APPDATA%\cardbank` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use super::settings::SnapshotFormat;
use crate::error::BankError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CARDBANK_DATA_DIR";

/// Manages all paths used by CardBank
#[derive(Debug, Clone)]
pub struct BankPaths {
    /// Base directory for all CardBank data
    base_dir: PathBuf,
}

impl BankPaths {
    /// Create a new BankPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, BankError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BankPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the account snapshot for the given format
    pub fn snapshot_file(&self, format: SnapshotFormat) -> PathBuf {
        self.data_dir()
            .join(format!("accounts.{}", format.extension()))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BankError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BankError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BankError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if CardBank has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BankError> {
    ProjectDirs::from("", "", "cardbank")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BankError::Config("Could not determine a home directory".into()))
}
