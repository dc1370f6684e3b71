//! Theme and greeting state for Tabula.
//!
//! Both values live in the settings store under flat string keys and are
//! resolved exactly once at startup. Writes happen only on explicit user
//! action, except for the one-time seeding of an unset value.

use std::str::FromStr;

use crate::db::Database;

/// Settings key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Settings key for the persisted greeting.
pub const GREETING_KEY: &str = "greeting";

/// Greeting shown to first-time users.
pub const DEFAULT_GREETING: &str = "Hello World!";

// =============================================================================
// Theme
// =============================================================================

/// App theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stored representation, one of `"light"` or `"dark"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored theme value is not `"light"` or `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Platform color-scheme preference.
///
/// Consulted only when no usable theme is stored.
pub fn system_theme() -> Theme {
    match dark_light::detect() {
        dark_light::Mode::Dark => Theme::Dark,
        dark_light::Mode::Light | dark_light::Mode::Default => Theme::Light,
    }
}

/// Resolve the startup theme.
///
/// A stored `"light"`/`"dark"` wins and is returned untouched. Anything
/// else (missing or unparseable) resolves through `system`, and the result
/// is persisted so later launches are deterministic even if the platform
/// preference changes.
pub fn resolve_initial_theme<F>(db: &Database, system: F) -> Theme
where
    F: FnOnce() -> Theme,
{
    match db.get_setting(THEME_KEY) {
        Ok(Some(stored)) => match stored.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(error = %e, "Stored theme is invalid, re-resolving");
            }
        },
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored theme");
        }
    }

    let theme = system();
    if let Err(e) = db.set_setting(THEME_KEY, theme.as_str()) {
        tracing::warn!(error = %e, "Failed to persist initial theme");
    }
    theme
}

/// Persist a theme choice. Called on every user toggle.
pub fn persist_theme(db: &Database, theme: Theme) -> anyhow::Result<()> {
    db.set_setting(THEME_KEY, theme.as_str())?;
    Ok(())
}

// =============================================================================
// Greeting
// =============================================================================

/// Resolve the startup greeting.
///
/// Returns the stored greeting, or [`DEFAULT_GREETING`] when nothing
/// usable is stored - in which case the default is persisted, mirroring
/// the theme resolution.
pub fn resolve_initial_greeting(db: &Database) -> String {
    match db.get_setting(GREETING_KEY) {
        Ok(Some(greeting)) if !greeting.trim().is_empty() => return greeting,
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored greeting");
        }
    }

    if let Err(e) = db.set_setting(GREETING_KEY, DEFAULT_GREETING) {
        tracing::warn!(error = %e, "Failed to persist default greeting");
    }
    DEFAULT_GREETING.to_string()
}

/// Validate and persist an edited greeting.
///
/// Returns the trimmed text on success. An edit that trims to empty is
/// rejected: nothing is written and `None` is returned, leaving the
/// stored value untouched.
pub fn save_greeting(db: &Database, candidate: &str) -> anyhow::Result<Option<String>> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    db.set_setting(GREETING_KEY, trimmed)?;
    Ok(Some(trimmed.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
