//! Terminal front-end and runtime event loop.
//!
//! This module provides the thin integration layer between the Storyfetch
//! library and the terminal. It owns stdin/stdout, the preference store, and
//! the fetch worker, and translates between them and library events.
//!
//! # Architecture
//!
//! All inputs converge on one event channel consumed by the main loop:
//!
//! ```text
//! ┌──────────────────┐   Event::TermEdited / Submitted / ...
//! │ stdin reader     │ ─────────────────────────────┐
//! │ (thread)         │                              ▼
//! └──────────────────┘                    ┌──────────────────┐
//! ┌──────────────────┐  FetchCompleted    │ main event loop  │
//! │ fetch worker     │ ─────────────────► │ handle_event     │
//! │ (thread)         │ ◄───────────────── │ execute actions  │
//! └──────────────────┘  FetchRequest      └──────────────────┘
//! ```
//!
//! Events are applied strictly in arrival order; the loop is the only place
//! session state is mutated.
//!
//! # Runtime Lifecycle
//!
//! 1. **Startup**: Parse CLI arguments, load configuration, initialize tracing
//! 2. **Restore**: Open the preference store and seed the staged term
//! 3. **Spawn**: Start the stdin reader and the fetch worker
//! 4. **Initial search**: Submit once so the seeded term is fetched
//! 5. **Loop**: Handle events, execute actions, re-render on change
//!
//! # Commands
//!
//! - `<text>`: Stage `<text>` and submit it
//! - `edit <text>`: Stage `<text>` without searching
//! - `go`: Submit the staged term
//! - `drop <id>`: Dismiss the story with that identity key
//! - `quit` / `q`: Exit

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use storyfetch::app::{handle_event, Action, Event};
use storyfetch::domain::error::{Result, StoryfetchError};
use storyfetch::fetch::spawn_fetch_worker;
use storyfetch::infrastructure::expand_tilde;
use storyfetch::storage::{JsonPreferences, PreferenceStore, SEARCH_TERM_KEY};
use storyfetch::{initialize, ui, AppState, Config};

/// Search Hacker News stories from the terminal.
#[derive(Debug, Parser)]
#[command(name = "storyfetch", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base search endpoint, overriding the configuration file.
    #[arg(long)]
    endpoint: Option<String>,

    /// Initial search term, overriding the persisted one.
    #[arg(long)]
    term: Option<String>,

    /// Tracing level for the log file (trace, debug, info, warn, error).
    #[arg(long)]
    trace_level: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("storyfetch: {e}");
        std::process::exit(1);
    }
}

/// Builds the session and drives the event loop until quit or EOF.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    storyfetch::observability::init_tracing(&config);

    let span = tracing::debug_span!("session_start");
    let _guard = span.entered();
    tracing::debug!(endpoint = %config.endpoint, "session starting");

    let mut store =
        JsonPreferences::new(config.resolved_data_dir().join("preferences.json"))?;
    let mut state = initialize(&config, &store);

    let (event_tx, event_rx) = mpsc::channel::<Event>();

    spawn_input_reader(event_tx.clone());

    let outcome_tx = event_tx.clone();
    let requests = spawn_fetch_worker(
        Duration::from_secs(config.http_timeout_secs),
        move |outcome| {
            outcome_tx.send(Event::FetchCompleted(outcome)).ok();
        },
    )?;

    // A CLI-provided term is staged like typed input so it persists too.
    if let Some(term) = cli.term {
        event_tx
            .send(Event::TermEdited(term))
            .map_err(|e| StoryfetchError::Worker(format!("event channel closed: {e}")))?;
    }

    // The session opens by searching the seeded term.
    event_tx
        .send(Event::Submitted)
        .map_err(|e| StoryfetchError::Worker(format!("event channel closed: {e}")))?;

    render(&state);

    for event in event_rx {
        let (changed, actions) = handle_event(&mut state, &event)?;

        let mut quit = false;
        for action in actions {
            match action {
                Action::SpawnFetch(request) => {
                    requests.send(request).map_err(|e| {
                        StoryfetchError::Worker(format!("fetch worker unavailable: {e}"))
                    })?;
                }
                Action::PersistTerm { term } => {
                    // Best-effort write-through; a failed write never
                    // interrupts the session.
                    if let Err(e) = store.set(SEARCH_TERM_KEY, &term) {
                        tracing::debug!(error = %e, "failed to persist search term");
                    }
                }
                Action::Quit => quit = true,
            }
        }

        if changed {
            render(&state);
        }
        if quit {
            break;
        }
    }

    tracing::debug!("session ended");
    Ok(())
}

/// Loads configuration from the optional file and applies CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let expanded = expand_tilde(&path.to_string_lossy());
            Config::from_file(std::path::Path::new(&expanded))?
        }
        None => Config::default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    if let Some(level) = &cli.trace_level {
        config.trace_level = Some(level.clone());
    }

    Ok(config)
}

/// Spawns the thread that turns stdin lines into events.
///
/// Sends [`Event::Quit`] when stdin reaches end-of-file so the main loop ends
/// cleanly on a closed input stream.
fn spawn_input_reader(event_tx: mpsc::Sender<Event>) {
    std::thread::Builder::new()
        .name("storyfetch-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                for event in parse_line(&line) {
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
            }
            event_tx.send(Event::Quit).ok();
        })
        .ok();
}

/// Parses one input line into the events it triggers.
///
/// A bare line of text stages and submits in one step; the `edit` and `go`
/// commands expose the two steps separately. Empty lines are ignored.
fn parse_line(line: &str) -> Vec<Event> {
    let line = line.trim();

    if line.is_empty() {
        return vec![];
    }

    match line.split_once(char::is_whitespace) {
        Some(("edit", rest)) => vec![Event::TermEdited(rest.trim().to_string())],
        Some(("drop", rest)) => vec![Event::StoryDismissed {
            id: rest.trim().to_string(),
        }],
        None if line == "go" => vec![Event::Submitted],
        None if line == "quit" || line == "q" => vec![Event::Quit],
        _ => vec![Event::TermEdited(line.to_string()), Event::Submitted],
    }
}

/// Prints the current screen and the input prompt.
fn render(state: &AppState) {
    let mut stdout = std::io::stdout().lock();
    for line in ui::render_lines(state) {
        let _ = writeln!(stdout, "{line}");
    }
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}
