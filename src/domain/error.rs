//! Error types for the Storyfetch client.
//!
//! This module defines the centralized error type [`StoryfetchError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Storyfetch operations.
///
/// This enum consolidates all error conditions that can occur during a search
/// session, from preference-store I/O to fetch-worker communication. Most variants
/// carry a description of the underlying failure; `Io` wraps the source error
/// directly via `#[from]`.
#[derive(Debug, Error)]
pub enum StoryfetchError {
    /// Preference store operation failed.
    ///
    /// Occurs when reading from or writing to the persisted preference file
    /// fails. The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Outbound search request could not be issued.
    ///
    /// Occurs when the HTTP client cannot be constructed. Failures of an
    /// individual request are collapsed into a fetch outcome instead and never
    /// surface through this variant.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Communication with the fetch worker failed.
    ///
    /// Occurs when the request or outcome channel to the background worker
    /// thread is disconnected. The string contains details about the failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be read or parsed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Storyfetch operations.
///
/// This is a type alias for `std::result::Result<T, StoryfetchError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use storyfetch::domain::Result;
///
/// fn stage_term() -> Result<()> {
///     // Function that may return StoryfetchError
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, StoryfetchError>;
