//! Storyfetch: an interactive Hacker News story search client for the terminal.
//!
//! Storyfetch is a small search session engine that provides:
//! - Search over Hacker News stories via the Algolia search API
//! - A staged/committed split between what is typed and what was searched
//! - Dismissable results with stale data retained across refetches and failures
//! - A remembered last search term backed by a JSON preference file
//! - Asynchronous fetching via a background worker thread
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front-end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Query reducer                                    │  ← Business logic
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Fetch Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (fetch/)      │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Target URL  │
//! │               │   │ - Preferences │   │ - Wire DTOs   │
//! │               │   │ - Backend API │   │ - HTTP worker │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Story model (domain/story)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Query state machine with event/action model
//! - [`domain`]: Core domain types (Story, errors)
//! - [`fetch`]: Target composition, wire decoding, and the fetch worker
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON preference persistence layer
//! - [`ui`]: Pure state-to-text rendering
//! - [`observability`]: Tracing setup with file output
//!
//! # Session Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse CLI arguments and the optional TOML configuration file
//!    - Initialize tracing
//!    - Open the preference store and read the persisted search term
//!    - Spawn the fetch worker and submit the initial search
//!
//! 2. **Input**:
//!    - Typed text stages a term (persisted immediately, never fetched)
//!    - A submit commits the staged term into a request target
//!
//! 3. **Fetching**:
//!    - A committed target change posts one request to the worker
//!    - The worker GETs the target and reports one outcome
//!    - Outcomes are applied to the query state in arrival order
//!
//! 4. **Rendering**:
//!    - The front-end re-renders from state after each handled event
//!
//! # Examples
//!
//! ```
//! use storyfetch::app::{handle_event, Event};
//! use storyfetch::{initialize, Config};
//!
//! struct NoStore;
//!
//! impl storyfetch::storage::PreferenceStore for NoStore {
//!     fn get(&self, _key: &str) -> storyfetch::domain::Result<Option<String>> {
//!         Ok(None)
//!     }
//!     fn set(&mut self, _key: &str, _value: &str) -> storyfetch::domain::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let config = Config::default();
//! let mut state = initialize(&config, &NoStore);
//!
//! let (changed, actions) = handle_event(&mut state, &Event::Submitted)?;
//! assert!(changed);
//! # let _ = actions;
//! # Ok::<(), storyfetch::domain::StoryfetchError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Staged vs. Committed Term
//!
//! The term being typed and the term last searched are distinct values. Editing
//! persists the staged term but never touches the network; only a submit
//! composes a new request target, and only a target change triggers a fetch.
//!
//! ## Worker-Based Fetching
//!
//! Outbound requests run on a dedicated worker thread fed by a single-consumer
//! channel. The main loop stays responsive, and completion outcomes are applied
//! strictly in arrival order through the single event-dispatch entry point.
//!
//! ## Stale Results Stay Visible
//!
//! Loading and failure transitions never clear the result set. A refetch shows
//! the previous stories until the new payload lands; a failure shows a generic
//! indicator above them.

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, QueryEvent, QueryState};
pub use domain::{Result, Story, StoryfetchError};

use crate::storage::{PreferenceStore, SEARCH_TERM_KEY};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base endpoint stories are searched against.
///
/// The committed search term is appended verbatim to this string to form the
/// request target.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Search term used when no persisted term exists yet.
const DEFAULT_TERM: &str = "React";

/// Request timeout applied to each outbound search, in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Session configuration.
///
/// Values come from a TOML configuration file with per-field fallbacks to the
/// defaults below; the binary applies CLI overrides on top.
///
/// # Example
///
/// ```toml
/// # ~/.config/storyfetch/config.toml
/// endpoint = "https://hn.algolia.com/api/v1/search?query="
/// default_term = "rust"
/// data_dir = "~/.local/share/storyfetch"
/// http_timeout_secs = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base search endpoint the committed term is appended to.
    pub endpoint: String,

    /// Term used when the preference store has no persisted term.
    pub default_term: String,

    /// Override for the data directory holding preferences and logs.
    ///
    /// Supports a leading `~`. Defaults to the platform data directory.
    pub data_dir: Option<String>,

    /// Per-request timeout for outbound searches, in seconds.
    pub http_timeout_secs: u64,

    /// Tracing level for log output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_term: DEFAULT_TERM.to_string(),
            data_dir: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            trace_level: None,
        }
    }
}

/// Raw configuration file contents before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    endpoint: Option<String>,
    default_term: Option<String>,
    data_dir: Option<String>,
    http_timeout_secs: Option<u64>,
    trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file, applying defaults per field.
    ///
    /// Missing fields fall back to their defaults; unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use storyfetch::Config;
    ///
    /// let config = Config::from_file(Path::new("config.toml"))?;
    /// # Ok::<(), storyfetch::StoryfetchError>(())
    /// ```
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StoryfetchError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| StoryfetchError::Config(format!("invalid TOML: {e}")))?;

        let defaults = Self::default();
        Ok(Self {
            endpoint: file.endpoint.unwrap_or(defaults.endpoint),
            default_term: file.default_term.unwrap_or(defaults.default_term),
            data_dir: file.data_dir,
            http_timeout_secs: file.http_timeout_secs.unwrap_or(defaults.http_timeout_secs),
            trace_level: file.trace_level,
        })
    }

    /// Resolves the data directory, honoring the configured override.
    ///
    /// A configured path has its leading tilde expanded; otherwise the platform
    /// data directory is used.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.as_ref().map_or_else(
            infrastructure::get_data_dir,
            |dir| PathBuf::from(infrastructure::expand_tilde(dir)),
        )
    }
}

/// Initializes session state from configuration and the preference store.
///
/// Reads the persisted search term once (the read-through half of term
/// persistence) and seeds the staged term with it, falling back to the
/// configured default when no value is stored or the read fails. No fetch is
/// issued here; the front-end submits once after initialization, which commits
/// the seeded term and triggers the first search.
///
/// # Parameters
///
/// * `config` - Session configuration
/// * `store` - Preference store to read the persisted term from
///
/// # Returns
///
/// An initialized [`AppState`] ready for event processing.
pub fn initialize(config: &Config, store: &dyn PreferenceStore) -> AppState {
    tracing::debug!("initializing search session");

    let term = match store.get(SEARCH_TERM_KEY) {
        Ok(Some(term)) => term,
        Ok(None) => {
            tracing::debug!(default_term = %config.default_term, "no persisted term, using default");
            config.default_term.clone()
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to read persisted term, using default");
            config.default_term.clone()
        }
    };

    AppState::new(&config.endpoint, term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct MapStore(std::collections::HashMap<String, String>);

    impl PreferenceStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StoryfetchError::Storage("broken".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StoryfetchError::Storage("broken".to_string()))
        }
    }

    #[test]
    fn initialize_prefers_the_persisted_term() {
        let mut map = std::collections::HashMap::new();
        map.insert(SEARCH_TERM_KEY.to_string(), "zig".to_string());

        let state = initialize(&Config::default(), &MapStore(map));
        assert_eq!(state.staged_term, "zig");
    }

    #[test]
    fn initialize_falls_back_to_the_default_term() {
        let state = initialize(&Config::default(), &MapStore(Default::default()));
        assert_eq!(state.staged_term, DEFAULT_TERM);
    }

    #[test]
    fn initialize_survives_a_broken_store() {
        let state = initialize(&Config::default(), &FailingStore);
        assert_eq!(state.staged_term, DEFAULT_TERM);
    }

    #[test]
    fn config_file_fields_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_term = \"rust\"\nhttp_timeout_secs = 3\ntrace_level = \"debug\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.default_term, "rust");
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn invalid_toml_surfaces_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_term = [").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(StoryfetchError::Config(_))));
    }

    #[test]
    fn configured_data_dir_wins_over_platform_default() {
        let config = Config {
            data_dir: Some("/tmp/storyfetch-test".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_data_dir(),
            PathBuf::from("/tmp/storyfetch-test")
        );
    }
}
