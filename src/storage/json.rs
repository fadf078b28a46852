//! JSON file-based preference store.
//!
//! This module provides a simple, human-readable preference store implementation
//! using JSON serialization. It uses atomic file writes (write-to-temp + rename)
//! to prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes the whole preference map
//! - **Best for**: a handful of keys, infrequent writes

use crate::domain::error::{Result, StoryfetchError};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps the preference map
/// in a versioned object for future format migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored preferences, indexed by key.
    #[serde(default)]
    preferences: HashMap<String, PreferenceRecord>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: HashMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// Stores preferences in a human-readable JSON file with atomic writes. The
/// entire dataset is kept in memory and persisted on modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is designed to be owned by the single
/// runtime thread that executes persistence actions.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "search": {
///       "value": "rust",
///       "updated_at": 1234567890
///     }
///   }
/// }
/// ```
pub struct JsonPreferences {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: PreferenceData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonPreferences {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::PathBuf;
    /// use storyfetch::storage::JsonPreferences;
    ///
    /// let store = JsonPreferences::new(PathBuf::from("/tmp/preferences.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty preference store");
            PreferenceData::default()
        };

        tracing::debug!(
            preference_count = data.preferences.len(),
            "preference store initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads preference data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &PathBuf) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| StoryfetchError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            preference_count = data.preferences.len(),
            "loaded preference data"
        );

        Ok(data)
    }

    /// Saves preference data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path. This ensures the file is never left in a corrupt state,
    /// even if the process crashes mid-write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails (should never happen with valid data)
    /// - Temporary file cannot be written
    /// - Rename operation fails (rare on POSIX systems)
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving preference data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StoryfetchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("preference store saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_get_preference", key = %key).entered();

        let value = self
            .data
            .preferences
            .get(key)
            .map(|record| record.value.clone());

        tracing::debug!(found = value.is_some(), "preference lookup complete");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key).entered();

        if let Some(existing) = self.data.preferences.get(key) {
            if existing.value == value {
                tracing::trace!("value unchanged, skipping write");
                return Ok(());
            }
        }

        self.data
            .preferences
            .insert(key.to_string(), PreferenceRecord::new(value));

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("preference stored");
        Ok(())
    }
}

impl Drop for JsonPreferences {
    /// Ensures data is saved on drop, even if a save was skipped earlier.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
