//! SQLite-backed key-value store.
//!
//! The whole application state is one JSON document under one key, so a
//! single `kv` table is all the schema there is.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{data_dir, KeyValueStore};
use crate::error::{CoreError, StorageError};

/// SQLite database holding the durable key-value records.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open `<data_dir>/<file_name>`.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open(file_name: &str) -> Result<Self, CoreError> {
        let path = data_dir()?.join(file_name);
        Ok(Self::open_at(&path)?)
    }

    /// Open the database at an explicit path, creating the schema if needed.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store, replacing any previous value.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a key; missing keys are fine.
    pub fn kv_delete(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.kv_get(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.kv_set(key, value)?)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Ok(self.kv_delete(key)?)
    }
}
