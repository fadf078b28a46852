//! Pure rendering of session state into display lines.
//!
//! This module transforms the query aggregate and staged term into plain text
//! lines for the terminal front-end. It contains no business logic and performs
//! no I/O; the binary decides where the lines go.

use crate::app::AppState;
use crate::domain::Story;

/// Width of the title column in a story row.
const TITLE_COLUMN_WIDTH: usize = 48;

/// Width of the author column in a story row.
const AUTHOR_COLUMN_WIDTH: usize = 16;

/// Renders the full screen for the current session state.
///
/// Produces a header with the result count, a status line while loading or
/// after a failure, one row per story, and a footer with the available
/// commands. Stale stories render as usual during a refetch and after an
/// error; only the status line differs.
#[must_use]
pub fn render_lines(state: &AppState) -> Vec<String> {
    let mut lines = vec![header_line(state), String::new()];

    if state.query.is_error {
        lines.push("  Something went wrong.".to_string());
        lines.push(String::new());
    }

    if state.query.is_loading {
        lines.push("  Loading...".to_string());
        lines.push(String::new());
    }

    if state.query.stories.is_empty() {
        if !state.query.is_loading && !state.query.is_error {
            lines.push("  No stories to show.".to_string());
        }
    } else {
        for story in &state.query.stories {
            lines.push(story_row(story));
        }
    }

    lines.push(String::new());
    lines.push(footer_line());
    lines
}

/// Formats the header with the staged term and the current result count.
fn header_line(state: &AppState) -> String {
    format!(
        " Hacker Stories ({count}) | search: {term}",
        count = state.query.stories.len(),
        term = state.staged_term
    )
}

/// Formats one story as a fixed-width table row.
///
/// Columns: identity key, title (with the link host appended when present),
/// author, comment count, points.
#[must_use]
pub fn story_row(story: &Story) -> String {
    let host = story.host();
    let title = if host.is_empty() {
        truncate(&story.title, TITLE_COLUMN_WIDTH)
    } else {
        truncate(&format!("{} ({host})", story.title), TITLE_COLUMN_WIDTH)
    };

    format!(
        "  [{id}] {title:<title_width$} {author:<author_width$} {comments:>4} comments {points:>5} points",
        id = story.id,
        title_width = TITLE_COLUMN_WIDTH,
        author = truncate(&story.author, AUTHOR_COLUMN_WIDTH),
        author_width = AUTHOR_COLUMN_WIDTH,
        comments = story.num_comments,
        points = story.points,
    )
}

/// Formats the footer keybinding hints.
fn footer_line() -> String {
    "  <text>: search  edit <text>: stage only  go: submit  drop <id>: dismiss  quit".to_string()
}

/// Truncates `text` to `max` characters, appending an ellipsis when shortened.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let keep: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{keep}...")
    } else {
        text.to_string()
    }
}
