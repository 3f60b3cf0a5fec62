//! Calculation history and last-form persistence over a key-value port.
//!
//! Three independent slots hold JSON values: the history list (most recent
//! first, at most [`MAX_HISTORY`] entries), the last submitted form, and
//! free-form settings. Reads never fail: a missing, corrupt or unreadable
//! slot is logged and treated as empty.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::StorageError;
use crate::model::{FormData, NewCalculation, SavedCalculation, Settings};

/// Number of calculations kept in the history.
pub const MAX_HISTORY: usize = 10;

/// Slot holding the history list.
pub const CALCULATIONS_KEY: &str = "calculations";
/// Slot holding the last submitted form.
pub const LAST_FORM_DATA_KEY: &str = "last_form_data";
/// Slot holding user settings.
pub const SETTINGS_KEY: &str = "settings";

/// Every slot the store owns.
pub const ALL_KEYS: [&str; 3] = [CALCULATIONS_KEY, LAST_FORM_DATA_KEY, SETTINGS_KEY];

/// String-valued key-value storage.
///
/// `set` must replace the value as a whole: a reader sees either the old
/// or the new value, never a mix.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage, mainly for tests.
///
/// Reads and writes can be switched off to simulate an unavailable backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` fail.
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every `set` and `remove` fail.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw access to a slot, bypassing the failure switches.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Overwrite a slot directly, bypassing the failure switches.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        self.lock().remove(key);
        Ok(())
    }
}

/// Owner of the persisted history, last form and settings.
///
/// Saving is a read-modify-write of the history slot and assumes a single
/// writer.
pub struct CalculationStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> CalculationStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Record a calculation and return its new id.
    ///
    /// The record goes to the front of the history, which is then cut down to
    /// [`MAX_HISTORY`] entries and written back in one piece.
    pub fn save(&self, calculation: NewCalculation) -> Result<String, StorageError> {
        let mut history = self.list();
        let saved = SavedCalculation {
            id: generate_id(),
            timestamp: Utc::now().timestamp_millis(),
            calculation,
        };
        let id = saved.id.clone();

        history.insert(0, saved);
        if history.len() > MAX_HISTORY {
            let evicted = history.len() - MAX_HISTORY;
            history.truncate(MAX_HISTORY);
            tracing::debug!(evicted, "trimmed calculation history");
        }

        self.write(CALCULATIONS_KEY, &history)?;
        tracing::debug!(%id, entries = history.len(), "saved calculation");
        Ok(id)
    }

    /// Stored calculations, most recent first.
    pub fn list(&self) -> Vec<SavedCalculation> {
        self.read(CALCULATIONS_KEY).unwrap_or_default()
    }

    /// Look up one calculation by id.
    pub fn get(&self, id: &str) -> Option<SavedCalculation> {
        self.list().into_iter().find(|c| c.id == id)
    }

    /// Remove a calculation. Unknown ids leave the stored slot untouched.
    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        let history = self.list();
        let before = history.len();
        let remaining: Vec<SavedCalculation> =
            history.into_iter().filter(|c| c.id != id).collect();
        if remaining.len() == before {
            tracing::debug!(%id, "no calculation to delete");
            return Ok(());
        }
        self.write(CALCULATIONS_KEY, &remaining)
    }

    /// Replace the last-form snapshot. Write failures are logged only.
    pub fn save_last_form_data(&self, form: &FormData) {
        if let Err(e) = self.write(LAST_FORM_DATA_KEY, form) {
            tracing::warn!("failed to save form data: {e}");
        }
    }

    pub fn get_last_form_data(&self) -> Option<FormData> {
        self.read(LAST_FORM_DATA_KEY)
    }

    /// Replace the settings map. Write failures are logged only.
    pub fn save_settings(&self, settings: &Settings) {
        if let Err(e) = self.write(SETTINGS_KEY, settings) {
            tracing::warn!("failed to save settings: {e}");
        }
    }

    pub fn get_settings(&self) -> Settings {
        self.read(SETTINGS_KEY).unwrap_or_default()
    }

    /// Remove every slot the store owns.
    ///
    /// Every slot is attempted; the first failure is returned afterwards.
    pub fn clear_all(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in ALL_KEYS {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("failed to remove {key}: {e}");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => {
                tracing::debug!("cleared all stored data");
                Ok(())
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("failed to read {key}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring corrupt {key} data: {e}");
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)
    }
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
