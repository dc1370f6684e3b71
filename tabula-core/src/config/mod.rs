//! Configuration module for Tabula.
//!
//! Theme and greeting persist in the SQLite settings store; feature
//! options load from an optional JSON file.

mod app_config;
mod settings;

pub use app_config::{AppConfig, ThemeControl};
pub use settings::{
    persist_theme, resolve_initial_greeting, resolve_initial_theme, save_greeting, system_theme,
    ParseThemeError, Theme, DEFAULT_GREETING, GREETING_KEY, THEME_KEY,
};
