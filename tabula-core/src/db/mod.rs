//! SQLite database layer for Tabula.
//!
//! Provides the persistent settings store: a flat string key-value table
//! holding the theme and greeting, accessed synchronously from the UI
//! thread.

mod migrations;

use rusqlite::Connection;
use std::path::PathBuf;

/// Database connection wrapper.
///
/// Provides a high-level API for interacting with the SQLite database.
/// Automatically handles connection setup, migrations, and file permissions.
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open the database at the default location.
    ///
    /// Default path: `~/.local/share/tabula/tabula.db`
    pub fn open() -> anyhow::Result<Self> {
        let path = Self::default_path()?;
        Self::open_at(path)
    }

    /// Open the database at a specific path.
    ///
    /// Creates parent directories if they don't exist.
    /// Sets file permissions to 0600 on Unix.
    pub fn open_at(path: PathBuf) -> anyhow::Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;

        // Settings stay private to the owning user.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
            {
                tracing::warn!(path = %path.display(), error = %e, "Failed to set database file permissions");
            }
        }

        Ok(Self { conn, path })
    }

    /// Get the default database path.
    ///
    /// Returns `~/.local/share/tabula/tabula.db` (or platform equivalent).
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        Ok(data_dir.join("tabula").join("tabula.db"))
    }

    /// Run database migrations.
    ///
    /// Safe to call multiple times - migrations are tracked and only run once.
    pub fn migrate(&self) -> anyhow::Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get a reference to the underlying connection.
    ///
    /// Use sparingly - prefer the high-level methods when possible.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get the database file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    // =========================================================================
    // Settings Storage
    // =========================================================================

    /// Save a setting to the database (upsert).
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?, ?, unixepoch())
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            [key, value],
        )?;
        Ok(())
    }

    /// Get a setting from the database.
    ///
    /// Returns `None` if the setting doesn't exist.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM settings WHERE key = ?")?;
        let result = stmt.query_row([key], |row| row.get(0));
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a setting with a default value.
    ///
    /// Returns the default if the setting doesn't exist or on error.
    pub fn get_setting_or(&self, key: &str, default: &str) -> String {
        self.get_setting(key)
            .ok()
            .flatten()
            .unwrap_or_else(|| default.to_string())
    }

    /// Delete a setting from the database.
    pub fn delete_setting(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn
            .execute("DELETE FROM settings WHERE key = ?", [key])?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // -------------------------------------------------------------------------
    // Test Helpers
    // -------------------------------------------------------------------------

    fn setup_test_db() -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Database::open_at(db_path).unwrap();
        db.migrate().unwrap();
        (temp_dir, db)
    }

    // -------------------------------------------------------------------------
    // Database Opening/Creation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_open_and_migrate() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.db");
        let db = Database::open_at(path).unwrap();
        db.migrate().unwrap();
    }

    #[test]
    fn test_open_at_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let nested_path = tmp
            .path()
            .join("deep")
            .join("nested")
            .join("dir")
            .join("test.db");

        assert!(!nested_path.parent().unwrap().exists());

        let _db = Database::open_at(nested_path.clone()).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_open_at_reuses_existing_database() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.db");

        // First open - create and populate
        {
            let db = Database::open_at(path.clone()).unwrap();
            db.migrate().unwrap();
            db.set_setting("greeting", "Hello again").unwrap();
        }

        // Second open - should see existing data
        {
            let db = Database::open_at(path).unwrap();
            let value = db.get_setting("greeting").unwrap();
            assert_eq!(value, Some("Hello again".to_string()));
        }
    }

    #[test]
    fn test_default_path_returns_valid_path() {
        if let Ok(path) = Database::default_path() {
            assert!(path.ends_with("tabula/tabula.db"));
            assert!(path.parent().is_some());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_open_at_sets_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("secure.db");

        let _db = Database::open_at(path.clone()).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        let mode = metadata.permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "Database should have 0600 permissions");
    }

    // -------------------------------------------------------------------------
    // Settings Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_setting_inserts_new() {
        let (_temp, db) = setup_test_db();

        db.set_setting("theme", "dark").unwrap();

        let value = db.get_setting("theme").unwrap();
        assert_eq!(value, Some("dark".to_string()));
    }

    #[test]
    fn test_set_setting_upserts_existing() {
        let (_temp, db) = setup_test_db();

        db.set_setting("theme", "light").unwrap();
        db.set_setting("theme", "dark").unwrap();

        let value = db.get_setting("theme").unwrap();
        assert_eq!(value, Some("dark".to_string()));
    }

    #[test]
    fn test_get_setting_returns_none_for_missing() {
        let (_temp, db) = setup_test_db();

        let value = db.get_setting("nonexistent").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_get_setting_or_returns_value_when_exists() {
        let (_temp, db) = setup_test_db();

        db.set_setting("theme", "dark").unwrap();

        let value = db.get_setting_or("theme", "light");
        assert_eq!(value, "dark");
    }

    #[test]
    fn test_get_setting_or_returns_default_when_missing() {
        let (_temp, db) = setup_test_db();

        let value = db.get_setting_or("nonexistent", "default_value");
        assert_eq!(value, "default_value");
    }

    #[test]
    fn test_delete_setting_removes_setting() {
        let (_temp, db) = setup_test_db();

        db.set_setting("theme", "dark").unwrap();
        assert!(db.get_setting("theme").unwrap().is_some());

        db.delete_setting("theme").unwrap();
        assert!(db.get_setting("theme").unwrap().is_none());
    }

    // -------------------------------------------------------------------------
    // Edge Cases
    // -------------------------------------------------------------------------

    #[test]
    fn test_setting_with_special_characters() {
        let (_temp, db) = setup_test_db();

        let greeting = "Góðan daginn! <&> \"quoted\"";
        db.set_setting("greeting", greeting).unwrap();

        let retrieved = db.get_setting("greeting").unwrap();
        assert_eq!(retrieved, Some(greeting.to_string()));
    }

    #[test]
    fn test_in_memory_database_works() {
        let db = Database::open_at(PathBuf::from(":memory:")).unwrap();
        db.migrate().unwrap();

        db.set_setting("theme", "light").unwrap();
        assert_eq!(db.get_setting("theme").unwrap(), Some("light".to_string()));
    }
}
