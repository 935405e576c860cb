mod config;
pub mod database;
pub mod migrations;
mod state_store;

pub use config::{Config, LoggingConfig, StorageConfig};
pub use database::Database;
pub use state_store::{StateStore, CURRENT_KEY, LEGACY_KEY};

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `CODEFOCUS_DATA_DIR` wins when set. Otherwise `~/.config/codefocus[-dev]/`
/// based on `CODEFOCUS_ENV`; set `CODEFOCUS_ENV=dev` to use the development
/// directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("CODEFOCUS_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("CODEFOCUS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("codefocus-dev")
            } else {
                base_dir.join("codefocus")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Durable string key-value store backing [`StateStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access for seeding fixtures.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
