//! Preference store abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over durable
//! key/value backends for small per-user preferences. This allows swapping the
//! persistence implementation without changing session logic.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: one read, one write. It stores strings
//! under string keys and nothing else; callers own the meaning of both. Each
//! method maps directly to a use case in the session runtime (read-through on
//! startup, write-through on change).

use crate::domain::error::Result;

/// Abstraction over durable preference backends.
///
/// Implementations persist values across sessions. Writes are durable by the
/// time `set` returns; whether a caller treats a write failure as fatal or
/// best-effort is the caller's decision, which is why `set` surfaces errors
/// instead of swallowing them.
///
/// # Implementations
///
/// - [`JsonPreferences`](crate::storage::JsonPreferences): JSON file with atomic writes (default)
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use storyfetch::storage::{JsonPreferences, PreferenceStore, SEARCH_TERM_KEY};
///
/// let mut store = JsonPreferences::new(PathBuf::from("/tmp/preferences.json"))?;
/// store.set(SEARCH_TERM_KEY, "rust")?;
/// assert_eq!(store.get(SEARCH_TERM_KEY)?, Some("rust".to_string()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PreferenceStore: Send {
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// The write is durable when this returns successfully.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
