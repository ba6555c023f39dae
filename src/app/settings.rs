use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::error::Result;

/// The persisted theme flag. Stored as the literal strings `"dark"` /
/// `"light"`; an absent or unreadable settings file means dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: ThemeMode,
}

fn default_theme() -> ThemeMode {
    ThemeMode::Dark
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from an explicit path. Read and parse failures are
    /// not distinguished: both fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("angelkellogg");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(settings.theme.is_dark());
    }

    #[test]
    fn test_flip() {
        assert_eq!(ThemeMode::Dark.flipped(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.flipped(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_serialized_as_lowercase_literal() {
        let settings = AppSettings {
            theme: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"dark\""));

        let settings = AppSettings {
            theme: ThemeMode::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"light\""));
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_garbage_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json at all").unwrap();
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = AppSettings::load_from(&path);
        assert_eq!(settings.theme, ThemeMode::Dark);

        settings.theme = settings.theme.flipped();
        settings.save_to(&path).unwrap();

        let reloaded = AppSettings::load_from(&path);
        assert_eq!(reloaded.theme, ThemeMode::Light);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
    }
}
