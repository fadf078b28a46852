//! Fetch worker message types for cross-thread communication.
//!
//! This module defines the request and outcome protocol between the runtime
//! event loop and the background worker thread that performs outbound search
//! requests. Requests flow one way over a channel; each request produces exactly
//! one outcome flowing back.

use crate::domain::Story;

/// A request for one outbound search, posted to the fetch worker.
///
/// Carries the fully composed request target. Requests are queued in submit
/// order on a single-consumer channel; the worker handles them one at a time,
/// so outcomes arrive in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// The committed request target to GET.
    pub target: String,
}

impl FetchRequest {
    /// Creates a fetch request for the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// The completion outcome of one fetch request.
///
/// Every request resolves to exactly one outcome. Failure carries no cause:
/// transport errors, non-success statuses, and undecodable bodies all collapse
/// into [`FetchOutcome::Failed`]. The worker logs the specifics at debug level;
/// state and user-visible output only ever see the generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was received and decoded into a story list.
    Delivered {
        /// Stories in server response order.
        stories: Vec<Story>,
    },

    /// The request failed; cause discarded.
    Failed,
}
