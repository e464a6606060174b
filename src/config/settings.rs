//! User settings for saldo
//!
//! Three independent flags persisted across sessions: whether the user has
//! started a session, the theme preference, and the profile image data-URL.
//! A missing file or missing key falls back to defaults (not started, light
//! theme, placeholder avatar).

use serde::{Deserialize, Serialize};

use super::paths::SaldoPaths;
use crate::error::SaldoError;
use crate::storage::file_io::write_json_atomic;

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Flip between light and dark
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

fn default_schema_version() -> u32 {
    1
}

fn default_profile_image() -> String {
    "https://picsum.photos/seed/user123/200".to_string()
}

fn default_currency() -> String {
    "R$".to_string()
}

/// User settings for saldo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether the user has started a session
    #[serde(default)]
    pub started: bool,

    /// Theme preference
    #[serde(default)]
    pub theme: Theme,

    /// Profile image (URL or data-URL)
    #[serde(default = "default_profile_image")]
    pub profile_image: String,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            started: false,
            theme: Theme::default(),
            profile_image: default_profile_image(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SaldoPaths) -> Result<Self, SaldoError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SaldoError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SaldoError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SaldoPaths) -> Result<(), SaldoError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.started);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.currency_symbol, "R$");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(!settings.started);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut settings = Settings::default();
        settings.started = true;
        settings.theme = Theme::Dark;
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert!(reloaded.started);
        assert_eq!(reloaded.theme, Theme::Dark);
    }

    #[test]
    fn test_missing_keys_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(!settings.started);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.profile_image, default_profile_image());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("LIGHT"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
