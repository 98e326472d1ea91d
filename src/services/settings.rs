use crate::db::Database;
use anyhow::Result;
use rusqlite::OptionalExtension;
use std::collections::HashMap;
use std::sync::RwLock;

/// String key-value storage, the server-side counterpart of `localStorage`.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Get a setting value by key
pub fn get_setting(db: &Database, key: &str) -> Result<Option<String>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?")?;
    let result = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(result)
}

/// Set a setting value (insert or update)
pub fn set_setting(db: &Database, key: &str, value: &str) -> Result<()> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = CURRENT_TIMESTAMP",
        [key, value],
    )?;
    Ok(())
}

/// Delete a setting
pub fn delete_setting(db: &Database, key: &str) -> Result<()> {
    let conn = db.get()?;
    conn.execute("DELETE FROM settings WHERE key = ?", [key])?;
    Ok(())
}

impl SettingsStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        get_setting(self, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        set_setting(self, key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        delete_setting(self, key)
    }
}

/// Settings kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        values.remove(key);
        Ok(())
    }
}
