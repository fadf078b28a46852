//! Storage record models for the persistence layer.
//!
//! This module defines the raw storage record types used by preference backends.
//! These types are separate from session state to keep a clear boundary between
//! storage representation and application logic.

use serde::{Deserialize, Serialize};

/// Represents one stored preference value.
///
/// This is the storage-layer representation of a preference, carrying the value
/// itself plus an update timestamp for inspection and debugging of the
/// preference file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// The stored value.
    pub value: String,

    /// Unix timestamp of the most recent write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record for `value`, stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyfetch::storage::PreferenceRecord;
    ///
    /// let record = PreferenceRecord::new("rust");
    /// assert_eq!(record.value, "rust");
    /// assert!(record.updated_at > 0);
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
