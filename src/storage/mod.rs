//! Storage layer for persisted user preferences.
//!
//! This module provides the persistence abstraction for remembering small
//! per-user values across sessions, most importantly the last committed search
//! term. It uses JSON file storage with atomic writes.
//!
//! # Modules
//!
//! - `backend`: Preference store trait abstraction for backend implementations
//! - `json`: JSON file-based store implementation
//! - `models`: Storage record types separate from session state

pub mod backend;
pub mod json;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonPreferences;
pub use models::PreferenceRecord;

/// Key under which the last committed search term is stored.
pub const SEARCH_TERM_KEY: &str = "search";
