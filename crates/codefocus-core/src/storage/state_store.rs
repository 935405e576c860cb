//! Load/save/reset of the persisted state against a key-value store.
//!
//! This is the only gateway to durable storage. `load` never fails: corrupt
//! or missing data degrades to legacy migration and then to defaults. When no
//! store is available `save` and `reset` do nothing.

use super::migrations::{self, StoredDocument};
use super::{Config, Database, KeyValueStore};
use crate::error::CoreError;
use crate::state::PersistedState;

/// Key of the current-schema document.
pub const CURRENT_KEY: &str = "codefocus-app";
/// Key of the legacy stats-only document.
pub const LEGACY_KEY: &str = "codefocus-stats";

pub struct StateStore<S> {
    backend: Option<S>,
}

impl StateStore<Database> {
    /// Open the SQLite store named by `config`; an unavailable store if that
    /// fails.
    pub fn open(config: &Config) -> Self {
        match Database::open(&config.storage.database_file) {
            Ok(db) => Self::new(db),
            Err(e) => {
                tracing::warn!(error = %e, "durable store unavailable, running without persistence");
                Self::unavailable()
            }
        }
    }
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A store for contexts with no durable storage.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&S> {
        self.backend.as_ref()
    }

    pub fn into_backend(self) -> Option<S> {
        self.backend
    }

    fn read(backend: &S, key: &str) -> Option<String> {
        backend.get(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "failed to read stored document");
            None
        })
    }

    /// Load the persisted state.
    ///
    /// A usable legacy document (with no usable current one) is migrated and
    /// written back under [`CURRENT_KEY`] before returning.
    pub fn load(&mut self) -> PersistedState {
        let Some(backend) = self.backend.as_ref() else {
            tracing::debug!("no durable store, using default state");
            return PersistedState::default();
        };

        let current = Self::read(backend, CURRENT_KEY);
        let legacy = Self::read(backend, LEGACY_KEY);

        match migrations::decode(current.as_deref(), legacy.as_deref()) {
            StoredDocument::Current(state) => {
                tracing::debug!(version = state.version, "loaded current-schema state");
                state
            }
            StoredDocument::Legacy(state) => {
                tracing::info!(
                    days = state.stats.daily_stats.len(),
                    "migrating legacy statistics to current schema"
                );
                self.save(&state);
                state
            }
            StoredDocument::Missing => {
                tracing::debug!("no stored state, using defaults");
                PersistedState::default()
            }
        }
    }

    /// Overwrite the stored document with `state`.
    ///
    /// # Errors
    /// Returns an error if serialization or the backend write fails. An
    /// unavailable store is not an error.
    pub fn try_save(&mut self, state: &PersistedState) -> Result<(), CoreError> {
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };
        let document = serde_json::to_string(state)?;
        backend.set(CURRENT_KEY, &document)?;
        Ok(())
    }

    /// [`try_save`](Self::try_save), logging instead of returning failures.
    pub fn save(&mut self, state: &PersistedState) {
        if let Err(e) = self.try_save(state) {
            tracing::warn!(error = %e, "failed to save state");
        }
    }

    /// Remove both the current and the legacy record.
    ///
    /// # Errors
    /// Returns an error if the backend delete fails.
    pub fn try_reset(&mut self) -> Result<(), CoreError> {
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };
        backend.remove(CURRENT_KEY)?;
        backend.remove(LEGACY_KEY)?;
        Ok(())
    }

    /// [`try_reset`](Self::try_reset), logging instead of returning failures.
    pub fn reset(&mut self) {
        if let Err(e) = self.try_reset() {
            tracing::warn!(error = %e, "failed to reset state");
        }
    }
}
