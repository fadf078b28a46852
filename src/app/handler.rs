//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes front-end input
//! and fetch outcomes, translating them into state changes and action sequences.
//! It is the single dispatch entry point through which all state mutation flows,
//! which is what serializes concurrently arriving events: outcomes are applied
//! in the order they reach the event loop.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front-end or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] and the query reducer
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `TermEdited`, `Submitted`, `StoryDismissed`, `Quit`
//! - **Worker**: `FetchCompleted` wrapping the fetch outcome
//!
//! # Example
//!
//! ```
//! use storyfetch::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new("https://example.test/search?query=", "rust");
//! let (changed, actions) = handle_event(&mut state, &Event::Submitted)?;
//! assert!(changed);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), storyfetch::domain::StoryfetchError>(())
//! ```

use crate::app::state::{AppState, QueryEvent};
use crate::app::Action;
use crate::domain::error::Result;
use crate::fetch::{compose, FetchOutcome, FetchRequest};

/// Events triggered by front-end input or fetch completion.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the staged search term with the given text.
    ///
    /// Staging only: the committed request target is untouched and no fetch is
    /// issued. The new term is written through to the preference store.
    TermEdited(String),

    /// Commits the staged term into a request target and triggers a fetch.
    ///
    /// A fetch is issued only when the composed target differs from the
    /// currently committed one; re-submitting an identical term is a no-op.
    /// Submitting an empty staged term is rejected.
    Submitted,

    /// Removes one story from the current result set.
    ///
    /// Dispatches straight into the query state machine without touching the
    /// network or the committed target.
    StoryDismissed {
        /// Identity key of the story to remove.
        id: String,
    },

    /// Wraps a completion outcome from the fetch worker.
    FetchCompleted(FetchOutcome),

    /// Ends the session.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and side
/// effects. It pattern-matches on event types, applies query-machine events
/// where appropriate, and collects actions to be executed by the runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to session state
/// * `event` - Event to process
///
/// # Returns
///
/// A `(changed, actions)` pair: `changed` is true when the front-end should
/// re-render, `actions` are side effects to execute in sequence. Both may be
/// empty when the event had no effect (e.g. re-submitting an unchanged term).
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature stable
/// for handlers that hit storage or channel failures.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::TermEdited(text) => {
            if *text == state.staged_term {
                return Ok((false, vec![]));
            }

            state.staged_term.clone_from(text);
            tracing::trace!(term = %state.staged_term, "staged term updated");

            Ok((
                true,
                vec![Action::PersistTerm {
                    term: state.staged_term.clone(),
                }],
            ))
        }
        Event::Submitted => {
            if state.staged_term.is_empty() {
                tracing::debug!("empty term submitted, ignoring");
                return Ok((false, vec![]));
            }

            let target = compose(state.endpoint(), &state.staged_term);

            if state.target.as_deref() == Some(target.as_str()) {
                tracing::debug!(target = %target, "target unchanged, skipping fetch");
                return Ok((false, vec![]));
            }

            tracing::debug!(target = %target, "search submitted");
            state.target = Some(target.clone());
            state.query.apply(QueryEvent::FetchStarted);

            Ok((true, vec![Action::SpawnFetch(FetchRequest::new(target))]))
        }
        Event::StoryDismissed { id } => {
            if !state.query.contains(id) {
                tracing::debug!(story_id = %id, "dismissed story not in result set");
                return Ok((false, vec![]));
            }

            state.query.apply(QueryEvent::StoryRemoved(id.clone()));
            Ok((true, vec![]))
        }
        Event::FetchCompleted(outcome) => {
            match outcome {
                FetchOutcome::Delivered { stories } => {
                    tracing::debug!(story_count = stories.len(), "applying delivered results");
                    state.query.apply(QueryEvent::FetchSucceeded(stories.clone()));
                }
                FetchOutcome::Failed => {
                    tracing::debug!("applying fetch failure");
                    state.query.apply(QueryEvent::FetchFailed);
                }
            }
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Story;

    const ENDPOINT: &str = "https://example.test/search?query=";

    fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            title: format!("story {id}"),
            url: String::new(),
            author: String::new(),
            num_comments: 0,
            points: 0,
        }
    }

    #[test]
    fn editing_stages_and_persists_without_fetching() {
        let mut state = AppState::new(ENDPOINT, "rust");

        let (changed, actions) =
            handle_event(&mut state, &Event::TermEdited("zig".to_string())).unwrap();

        assert!(changed);
        assert_eq!(
            actions,
            vec![Action::PersistTerm {
                term: "zig".to_string()
            }]
        );
        assert_eq!(state.staged_term, "zig");
        assert!(state.target.is_none(), "editing must not commit a target");
        assert!(!state.query.is_loading);
    }

    #[test]
    fn editing_to_the_same_term_is_a_noop() {
        let mut state = AppState::new(ENDPOINT, "rust");

        let (changed, actions) =
            handle_event(&mut state, &Event::TermEdited("rust".to_string())).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_commits_target_and_spawns_fetch() {
        let mut state = AppState::new(ENDPOINT, "rust");

        let (changed, actions) = handle_event(&mut state, &Event::Submitted).unwrap();

        assert!(changed);
        assert_eq!(state.target.as_deref(), Some(format!("{ENDPOINT}rust").as_str()));
        assert!(state.query.is_loading);
        assert!(!state.query.is_error);
        assert_eq!(
            actions,
            vec![Action::SpawnFetch(FetchRequest::new(format!("{ENDPOINT}rust")))]
        );
    }

    #[test]
    fn resubmitting_an_identical_term_does_not_refetch() {
        let mut state = AppState::new(ENDPOINT, "rust");
        handle_event(&mut state, &Event::Submitted).unwrap();
        state
            .query
            .apply(QueryEvent::FetchSucceeded(vec![story("1")]));

        let (changed, actions) = handle_event(&mut state, &Event::Submitted).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert!(!state.query.is_loading);
    }

    #[test]
    fn empty_submit_is_rejected() {
        let mut state = AppState::new(ENDPOINT, "");

        let (changed, actions) = handle_event(&mut state, &Event::Submitted).unwrap();

        assert!(!changed);
        assert!(actions.is_empty());
        assert!(state.target.is_none());
    }

    #[test]
    fn dismissal_removes_without_network() {
        let mut state = AppState::new(ENDPOINT, "rust");
        state
            .query
            .apply(QueryEvent::FetchSucceeded(vec![story("1"), story("2")]));

        let (changed, actions) = handle_event(
            &mut state,
            &Event::StoryDismissed {
                id: "1".to_string(),
            },
        )
        .unwrap();

        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(state.query.stories, vec![story("2")]);
    }

    #[test]
    fn dismissing_an_unknown_story_changes_nothing() {
        let mut state = AppState::new(ENDPOINT, "rust");
        state
            .query
            .apply(QueryEvent::FetchSucceeded(vec![story("1")]));

        let (changed, _) = handle_event(
            &mut state,
            &Event::StoryDismissed {
                id: "missing".to_string(),
            },
        )
        .unwrap();

        assert!(!changed);
        assert_eq!(state.query.stories, vec![story("1")]);
    }

    #[test]
    fn delivered_outcome_replaces_results() {
        let mut state = AppState::new(ENDPOINT, "rust");
        handle_event(&mut state, &Event::Submitted).unwrap();

        let outcome = FetchOutcome::Delivered {
            stories: vec![story("1")],
        };
        let (changed, _) = handle_event(&mut state, &Event::FetchCompleted(outcome)).unwrap();

        assert!(changed);
        assert!(!state.query.is_loading);
        assert_eq!(state.query.stories, vec![story("1")]);
    }

    #[test]
    fn failed_outcome_keeps_stale_results() {
        let mut state = AppState::new(ENDPOINT, "rust");
        state
            .query
            .apply(QueryEvent::FetchSucceeded(vec![story("1")]));
        handle_event(&mut state, &Event::TermEdited("zig".to_string())).unwrap();
        handle_event(&mut state, &Event::Submitted).unwrap();

        let (changed, _) =
            handle_event(&mut state, &Event::FetchCompleted(FetchOutcome::Failed)).unwrap();

        assert!(changed);
        assert!(state.query.is_error);
        assert!(!state.query.is_loading);
        assert_eq!(state.query.stories, vec![story("1")], "stale results retained");
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = AppState::new(ENDPOINT, "rust");
        let (changed, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert!(!changed);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
