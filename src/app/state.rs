//! Application state and the query state machine.
//!
//! This module defines [`QueryState`], the reducer-owned aggregate of the current
//! result set plus its loading and error flags, and [`AppState`], the session
//! container wrapping it together with the staged search term and the committed
//! request target. It is the single source of truth for everything the front-end
//! renders.
//!
//! # Architecture
//!
//! `QueryState` is mutated exclusively through [`QueryState::apply`], a total
//! reducer over the closed [`QueryEvent`] sum type. Every transition sets both
//! status flags explicitly, so the loading and error flags can never be true at
//! the same time. The result set is untouched by loading and failure
//! transitions: stale stories stay visible during a refetch and after an error.
//!
//! # State Components
//!
//! - **Stories**: Current result set, in server response order
//! - **Status flags**: `is_loading` / `is_error`, mutually exclusive
//! - **Staged term**: What the user is typing, not yet searched
//! - **Target**: The committed request URL of the last submitted search
//!
//! The staged term and the committed target are deliberately separate values:
//! editing the input must never be conflated with searching.
//!
//! # Example
//!
//! ```
//! use storyfetch::app::{AppState, QueryEvent};
//!
//! let mut state = AppState::new("https://example.test/search?query=", "rust");
//! state.query.apply(QueryEvent::FetchStarted);
//! assert!(state.query.is_loading);
//! assert!(!state.query.is_error);
//! ```

use crate::domain::Story;

/// Events accepted by the query state machine.
///
/// The event set is closed: these four variants are the only way the query
/// aggregate changes, and the reducer matches them exhaustively. Fetch events
/// are produced by the fetch worker path, removal events by the dismissal
/// handler; nothing else writes to [`QueryState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// A search request is about to be issued.
    ///
    /// Raises the loading flag and clears any prior error. The current result
    /// set is left in place so stale stories remain visible during a refetch.
    FetchStarted,

    /// A search response was delivered and decoded.
    ///
    /// Replaces the result set wholesale with the payload (a full replace,
    /// never a merge) and clears both status flags. Applying two successive
    /// successes leaves exactly the second payload.
    FetchSucceeded(Vec<Story>),

    /// A search request failed for any reason.
    ///
    /// Raises the error flag and drops the loading flag. The result set is
    /// untouched; previously delivered stories stay on screen.
    FetchFailed,

    /// The user dismissed one story from the result set.
    ///
    /// Removes the entry whose identity key equals the given id, preserving
    /// the relative order of everything else. Status flags are unchanged.
    StoryRemoved(String),
}

/// The query aggregate: current results plus fetch status flags.
///
/// Owned and mutated only by [`QueryState::apply`]; external collaborators read
/// it to render and never write to it directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    /// Current result set, in the order the server delivered it.
    pub stories: Vec<Story>,

    /// A search request is in flight.
    pub is_loading: bool,

    /// The most recent search request failed.
    ///
    /// Never true while `is_loading` is true; every reducer arm assigns both
    /// flags explicitly.
    pub is_error: bool,
}

impl QueryState {
    /// Creates the initial query state: no stories, not loading, no error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event to the aggregate.
    ///
    /// This is the complete transition function of the query state machine.
    /// Every state accepts every event; the match is exhaustive over the closed
    /// event set, so there is no unknown-event branch to fail on.
    ///
    /// # Tracing
    ///
    /// Emits a debug-level span with the event discriminant and the resulting
    /// story count.
    pub fn apply(&mut self, event: QueryEvent) {
        let _span = tracing::debug_span!("apply_query_event", event = ?event_name(&event)).entered();

        match event {
            QueryEvent::FetchStarted => {
                self.is_loading = true;
                self.is_error = false;
            }
            QueryEvent::FetchSucceeded(stories) => {
                self.stories = stories;
                self.is_loading = false;
                self.is_error = false;
            }
            QueryEvent::FetchFailed => {
                self.is_loading = false;
                self.is_error = true;
            }
            QueryEvent::StoryRemoved(id) => {
                self.stories.retain(|story| story.id != id);
            }
        }

        tracing::debug!(
            story_count = self.stories.len(),
            is_loading = self.is_loading,
            is_error = self.is_error,
            "query state updated"
        );
    }

    /// Returns true if a story with the given identity key is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.stories.iter().any(|story| story.id == id)
    }
}

/// Short event name for span fields, without payload data.
fn event_name(event: &QueryEvent) -> &'static str {
    match event {
        QueryEvent::FetchStarted => "fetch_started",
        QueryEvent::FetchSucceeded(_) => "fetch_succeeded",
        QueryEvent::FetchFailed => "fetch_failed",
        QueryEvent::StoryRemoved(_) => "story_removed",
    }
}

/// Session state container.
///
/// Holds the query aggregate together with the two strings the controller owns:
/// the staged search term (what the user is typing) and the committed request
/// target (what was last searched). Mutated by the event handler in response to
/// front-end input and fetch outcomes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The query aggregate driven by [`QueryEvent`]s.
    pub query: QueryState,

    /// The search term as currently typed, not yet submitted.
    ///
    /// Mirrored to the preference store on every change and used to compose
    /// the next request target on submit. Editing it triggers no fetch.
    pub staged_term: String,

    /// The committed request target of the last submitted search.
    ///
    /// `None` until the first submit. A new submit replaces it only when the
    /// composed target actually differs, which is what gates re-fetching.
    pub target: Option<String>,

    /// Base endpoint the search term is appended to on submit.
    endpoint: String,
}

impl AppState {
    /// Creates a session with the given base endpoint and initial search term.
    ///
    /// The initial term is typically the persisted term from the preference
    /// store, falling back to the configured default on first run. No fetch is
    /// issued here; the front-end submits once after initialization.
    ///
    /// # Example
    ///
    /// ```
    /// use storyfetch::app::AppState;
    ///
    /// let state = AppState::new("https://example.test/search?query=", "rust");
    /// assert_eq!(state.staged_term, "rust");
    /// assert!(state.target.is_none());
    /// ```
    #[must_use]
    pub fn new(endpoint: impl Into<String>, initial_term: impl Into<String>) -> Self {
        Self {
            query: QueryState::new(),
            staged_term: initial_term.into(),
            target: None,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the base endpoint the session composes targets from.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            title: format!("story {id}"),
            url: format!("https://example.com/{id}"),
            author: "author".to_string(),
            num_comments: 1,
            points: 1,
        }
    }

    #[test]
    fn fetch_started_sets_loading_and_clears_error() {
        let mut state = QueryState {
            stories: vec![story("1")],
            is_loading: false,
            is_error: true,
        };

        state.apply(QueryEvent::FetchStarted);

        assert!(state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.stories, vec![story("1")], "results untouched by start");
    }

    #[test]
    fn fetch_succeeded_replaces_results_wholesale() {
        let mut state = QueryState::new();
        state.apply(QueryEvent::FetchStarted);
        state.apply(QueryEvent::FetchSucceeded(vec![story("1"), story("2")]));

        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.stories.len(), 2);

        // Last write wins: a second success leaves exactly the second payload.
        state.apply(QueryEvent::FetchSucceeded(vec![story("3")]));
        assert_eq!(state.stories, vec![story("3")]);
    }

    #[test]
    fn fetch_failed_keeps_stale_results() {
        let mut state = QueryState {
            stories: vec![story("1")],
            is_loading: true,
            is_error: false,
        };

        state.apply(QueryEvent::FetchFailed);

        assert!(!state.is_loading);
        assert!(state.is_error);
        assert_eq!(state.stories, vec![story("1")]);
    }

    #[test]
    fn story_removed_is_exact_match_and_order_preserving() {
        let mut state = QueryState {
            stories: vec![story("1"), story("10"), story("2")],
            is_loading: false,
            is_error: false,
        };

        state.apply(QueryEvent::StoryRemoved("1".to_string()));

        assert!(!state.contains("1"));
        assert_eq!(state.stories, vec![story("10"), story("2")]);
        assert!(!state.is_loading);
        assert!(!state.is_error);
    }

    #[test]
    fn story_removed_for_absent_id_is_a_noop() {
        let mut state = QueryState {
            stories: vec![story("1")],
            is_loading: false,
            is_error: false,
        };

        state.apply(QueryEvent::StoryRemoved("missing".to_string()));

        assert_eq!(state.stories, vec![story("1")]);
    }

    #[test]
    fn flags_are_never_simultaneously_true() {
        // Exercise every event from every reachable flag combination.
        let events = [
            QueryEvent::FetchStarted,
            QueryEvent::FetchSucceeded(vec![story("1")]),
            QueryEvent::FetchFailed,
            QueryEvent::StoryRemoved("1".to_string()),
        ];

        let mut reachable = vec![QueryState::new()];
        for _ in 0..4 {
            let mut next = Vec::new();
            for state in &reachable {
                for event in &events {
                    let mut successor = state.clone();
                    successor.apply(event.clone());
                    assert!(
                        !(successor.is_loading && successor.is_error),
                        "loading and error raised together after {event:?}"
                    );
                    next.push(successor);
                }
            }
            reachable = next;
        }
    }

    #[test]
    fn loading_then_success_scenario() {
        let mut state = QueryState::new();

        state.apply(QueryEvent::FetchStarted);
        assert!(state.is_loading);
        assert!(state.stories.is_empty());

        state.apply(QueryEvent::FetchSucceeded(vec![story("1")]));
        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.stories, vec![story("1")]);
    }
}
