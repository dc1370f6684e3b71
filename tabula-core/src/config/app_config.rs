//! Feature options for Tabula.
//!
//! The original deployment shipped near-duplicate page variants differing
//! only in which surfaces were present; Tabula folds them into one binary
//! configured by an optional JSON file. The file is read once at startup
//! and never written by the app.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Style of the theme control in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeControl {
    /// Sun/moon icon button.
    #[default]
    Icon,
    /// Labeled "Dark Mode" checkbox.
    Checkbox,
}

/// Application feature options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Show the "Customize" action and greeting editor.
    pub enable_greeting_editor: bool,

    /// Show the apps trigger and launcher dropdown.
    pub enable_launcher_menu: bool,

    /// Which theme control the top bar renders.
    pub theme_control: ThemeControl,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_greeting_editor: true,
            enable_launcher_menu: true,
            theme_control: ThemeControl::default(),
        }
    }
}

impl AppConfig {
    /// Default config file path: `~/.config/tabula/config.json`
    /// (or platform equivalent).
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("tabula").join("config.json"))
    }

    /// Load options from the default location.
    ///
    /// Missing or unreadable config falls back to defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "No config directory, using default options");
                Self::default()
            }
        }
    }

    /// Load options from a specific file, using defaults when the file is
    /// absent or can't be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
