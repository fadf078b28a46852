//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating per-user state on disk and
//! normalizing user-supplied paths from configuration.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
