//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing front-end input or fetch
//! outcomes. Actions bridge pure state transformations and effectful operations
//! like issuing requests or writing through to the preference store.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The runtime executes these
//! actions in sequence after the state mutation has already happened.
//!
//! # Example
//!
//! ```
//! use storyfetch::app::Action;
//! use storyfetch::fetch::FetchRequest;
//!
//! let actions = vec![
//!     Action::SpawnFetch(FetchRequest::new("https://example.test/search?query=rust")),
//! ];
//! ```

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the runtime.
///
/// Actions are produced by the event handler and executed by the runtime loop.
/// They represent the boundary between the pure state machine and effectful
/// operations on the network, disk, and process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the fetch worker thread.
    ///
    /// Emitted when a submit commits a new request target. The worker performs
    /// the outbound GET and feeds exactly one completion outcome back into the
    /// event loop.
    SpawnFetch(FetchRequest),

    /// Writes the staged search term through to the preference store.
    ///
    /// Emitted on every staged-term change so the next session starts from the
    /// last term typed. The write is best-effort: the runtime logs and swallows
    /// storage failures.
    PersistTerm {
        /// The term to store under the search-term key.
        term: String,
    },

    /// Ends the session and exits the runtime loop.
    ///
    /// Emitted when the user explicitly requests to quit. Any in-flight request
    /// is left to finish on its own; its outcome is discarded with the process.
    Quit,
}
