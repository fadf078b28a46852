//! Domain layer for the Storyfetch client.
//!
//! This module contains the core domain types for the crate, independent of the
//! HTTP transport, storage backend, or terminal front-end. It keeps the business
//! rules isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`story`]: Story domain model and display helpers
//!
//! # Examples
//!
//! ```
//! use storyfetch::domain::{Result, Story};
//!
//! fn first_story(stories: &[Story]) -> Result<Option<&Story>> {
//!     Ok(stories.first())
//! }
//! ```

pub mod error;
pub mod story;

pub use error::{Result, StoryfetchError};
pub use story::Story;
