//! Terminal rendering layer.
//!
//! This module turns session state into display lines for the interactive
//! front-end. Rendering is pure; the binary owns stdout.
//!
//! # Architecture
//!
//! ```text
//! AppState → render_lines → Vec<String> → stdout
//! ```

pub mod render;

pub use render::{render_lines, story_row};
