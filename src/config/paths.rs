//! Path management for saldo
//!
//! Resolves where configuration and data files live.
//!
//! ## Path Resolution Order
//!
//! 1. `SALDO_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g. `~/.config/saldo`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SaldoError;

/// Manages all paths used by saldo
#[derive(Debug, Clone)]
pub struct SaldoPaths {
    /// Base directory for all saldo data
    base_dir: PathBuf,
}

impl SaldoPaths {
    /// Create a new SaldoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SaldoError> {
        let base_dir = if let Ok(custom) = std::env::var("SALDO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "saldo")
                .ok_or_else(|| {
                    SaldoError::Config("Could not determine home directory".to_string())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create SaldoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to accounts.json
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Get the path to cards.json
    pub fn cards_file(&self) -> PathBuf {
        self.data_dir().join("cards.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to goals.json
    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SaldoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaldoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SaldoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
