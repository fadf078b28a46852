//! End-to-end event-flow tests without a network.
//!
//! These tests drive the session exactly as the runtime does (initialize from
//! the preference store, dispatch events through the handler, execute the
//! returned actions) but feed fetch outcomes in by hand instead of running the
//! HTTP worker.

use storyfetch::app::{handle_event, Action, Event};
use storyfetch::domain::Story;
use storyfetch::fetch::{term_of, FetchOutcome};
use storyfetch::storage::{JsonPreferences, PreferenceStore, SEARCH_TERM_KEY};
use storyfetch::{initialize, Config, DEFAULT_ENDPOINT};
use tempfile::TempDir;

fn story(id: &str) -> Story {
    Story {
        id: id.to_string(),
        title: format!("story {id}"),
        url: format!("https://example.com/{id}"),
        author: "author".to_string(),
        num_comments: 3,
        points: 17,
    }
}

/// Executes persistence actions the way the runtime does and returns any
/// spawned fetch targets.
fn execute(actions: Vec<Action>, store: &mut JsonPreferences) -> Vec<String> {
    let mut targets = Vec::new();
    for action in actions {
        match action {
            Action::SpawnFetch(request) => targets.push(request.target),
            Action::PersistTerm { term } => store.set(SEARCH_TERM_KEY, &term).unwrap(),
            Action::Quit => {}
        }
    }
    targets
}

#[test]
fn first_run_searches_the_default_term() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonPreferences::new(dir.path().join("preferences.json")).unwrap();

    let config = Config::default();
    let mut state = initialize(&config, &store);
    assert_eq!(state.staged_term, "React");

    let (_, actions) = handle_event(&mut state, &Event::Submitted).unwrap();
    let targets = execute(actions, &mut store);

    assert_eq!(targets, vec![format!("{DEFAULT_ENDPOINT}React")]);
    assert_eq!(
        term_of(DEFAULT_ENDPOINT, &targets[0]),
        Some("React"),
        "the term must be recoverable from the committed target"
    );
    assert!(state.query.is_loading);
}

#[test]
fn edited_term_survives_into_the_next_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    let config = Config::default();

    {
        let mut store = JsonPreferences::new(path.clone()).unwrap();
        let mut state = initialize(&config, &store);

        let (_, actions) =
            handle_event(&mut state, &Event::TermEdited("rust".to_string())).unwrap();
        let targets = execute(actions, &mut store);
        assert!(targets.is_empty(), "editing must not fetch");
    }

    let store = JsonPreferences::new(path).unwrap();
    let state = initialize(&config, &store);
    assert_eq!(state.staged_term, "rust");
}

#[test]
fn full_search_dismiss_cycle() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonPreferences::new(dir.path().join("preferences.json")).unwrap();
    let config = Config::default();
    let mut state = initialize(&config, &store);

    // Submit and deliver a payload.
    let (_, actions) = handle_event(&mut state, &Event::Submitted).unwrap();
    assert_eq!(execute(actions, &mut store).len(), 1);

    let outcome = FetchOutcome::Delivered {
        stories: vec![story("1"), story("2"), story("3")],
    };
    handle_event(&mut state, &Event::FetchCompleted(outcome)).unwrap();
    assert!(!state.query.is_loading);
    assert_eq!(state.query.stories.len(), 3);

    // Dismiss the middle story; order of the rest is untouched.
    handle_event(
        &mut state,
        &Event::StoryDismissed {
            id: "2".to_string(),
        },
    )
    .unwrap();
    let ids: Vec<&str> = state.query.stories.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    // A failed refetch of a new term keeps the dismissed view on screen.
    handle_event(&mut state, &Event::TermEdited("zig".to_string())).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Submitted).unwrap();
    assert_eq!(execute(actions, &mut store).len(), 1);

    handle_event(&mut state, &Event::FetchCompleted(FetchOutcome::Failed)).unwrap();
    assert!(state.query.is_error);
    let ids: Vec<&str> = state.query.stories.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn racing_submits_settle_to_the_last_arriving_outcome() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonPreferences::new(dir.path().join("preferences.json")).unwrap();
    let mut state = initialize(&Config::default(), &store);

    // Two submits with different terms both spawn requests.
    let (_, actions) = handle_event(&mut state, &Event::Submitted).unwrap();
    let first = execute(actions, &mut store);
    handle_event(&mut state, &Event::TermEdited("rust".to_string())).unwrap();
    let (_, actions) = handle_event(&mut state, &Event::Submitted).unwrap();
    let second = execute(actions, &mut store);
    assert_eq!(first.len() + second.len(), 2);

    // Outcomes apply in arrival order; whichever lands last wins the state.
    let early = FetchOutcome::Delivered {
        stories: vec![story("early")],
    };
    let late = FetchOutcome::Delivered {
        stories: vec![story("late")],
    };
    handle_event(&mut state, &Event::FetchCompleted(early)).unwrap();
    handle_event(&mut state, &Event::FetchCompleted(late)).unwrap();

    let ids: Vec<&str> = state.query.stories.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["late"]);
    assert!(!state.query.is_loading);
    assert!(!state.query.is_error);
}
