//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime (main.rs) and the domain/storage/fetch layers. It implements the
//! event-driven architecture that powers the interactive search session.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Outcomes ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Query state machine and session state container
//!
//! # Example
//!
//! ```
//! use storyfetch::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new("https://example.test/search?query=", "rust");
//! let (changed, actions) = handle_event(&mut state, &Event::Submitted)?;
//! # let _ = (changed, actions);
//! # Ok::<(), storyfetch::domain::StoryfetchError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{AppState, QueryEvent, QueryState};
