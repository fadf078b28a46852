//! Fetch orchestration: target composition, wire decoding, and the worker thread.
//!
//! This module turns a committed search term into exactly one outbound request
//! and exactly one completion event. Requests travel over a single-consumer
//! channel to a background thread; outcomes travel back into the runtime's event
//! loop and are applied in arrival order.
//!
//! # Architecture
//!
//! - `target`: Pure composition of the outbound request URL
//! - `messages`: Request/outcome protocol types for the worker boundary
//! - `response`: Wire-format records and their ingestion into domain stories
//! - `worker`: The blocking-HTTP worker thread and its spawn function

pub mod messages;
pub mod response;
pub mod target;
pub mod worker;

pub use messages::{FetchOutcome, FetchRequest};
pub use response::{SearchResponse, StoryHit};
pub use target::{compose, term_of};
pub use worker::{spawn_fetch_worker, FetchWorker};
