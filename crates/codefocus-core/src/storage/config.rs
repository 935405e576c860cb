//! TOML-based application configuration.
//!
//! Covers how the program runs, not what the user tracks:
//! - Log level
//! - Database file name inside the data directory
//!
//! Timer durations and goals are user data and live in the persisted state.
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Durable store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_database_file")]
    pub database_file: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_log_level() -> String {
    "warn".into()
}
fn default_database_file() -> String {
    "codefocus.db".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    let n = value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                    serde_json::Value::Number(n.into())
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("not a leaf key".to_string()));
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf, ConfigError> {
        data_dir()
            .map(|dir| dir.join("config.toml"))
            .map_err(|e| ConfigError::LoadFailed {
                path: PathBuf::from("config.toml"),
                message: e.to_string(),
            })
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.clone(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value has the wrong type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.logging.level, "warn");
        assert_eq!(parsed.storage.database_file, "codefocus.db");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(parsed.logging.level, "debug");
        assert_eq!(parsed.storage.database_file, "codefocus.db");

        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("logging.level").as_deref(), Some("warn"));
        assert_eq!(cfg.get("storage.database_file").as_deref(), Some("codefocus.db"));
        assert!(cfg.get("logging.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn apply_updates_nested_string() {
        let mut cfg = Config::default();
        cfg.apply("logging.level", "codefocus_core=debug").unwrap();
        assert_eq!(cfg.logging.level, "codefocus_core=debug");
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("logging.nonexistent_key", "value"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.apply("nope.level", "value"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn apply_rejects_section_keys() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("logging", "debug"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn set_json_value_by_path_coerces_types() {
        let mut json = serde_json::json!({"a": {"flag": true, "n": 1, "s": "x"}});
        Config::set_json_value_by_path(&mut json, "a.flag", "false").unwrap();
        Config::set_json_value_by_path(&mut json, "a.n", "75").unwrap();
        Config::set_json_value_by_path(&mut json, "a.s", "y").unwrap();
        assert_eq!(json, serde_json::json!({"a": {"flag": false, "n": 75, "s": "y"}}));
        assert!(Config::set_json_value_by_path(&mut json, "a.flag", "not_a_bool").is_err());
        assert!(Config::set_json_value_by_path(&mut json, "a.n", "many").is_err());
    }
}
