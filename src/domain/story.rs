//! Story domain model and display helpers.
//!
//! This module defines the core `Story` type representing one search result
//! delivered by the Hacker News search API. Stories are immutable once delivered:
//! they are created only while decoding a successful response and leave the result
//! set only by being dismissed.

use serde::{Deserialize, Serialize};

/// Represents one story in the current result set.
///
/// A story is identified by `id`, the server-assigned object identifier. Identity
/// is exact-match on that key; titles and URLs are display data and carry no
/// identity semantics.
///
/// # Fields
///
/// - `id`: Unique object identifier assigned by the search service
/// - `title`: Story headline
/// - `url`: Link target of the headline
/// - `author`: Submitter's username
/// - `num_comments`: Comment count, never negative
/// - `points`: Score, may be negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u64,
    pub points: i64,
}

impl Story {
    /// Returns the host portion of the story URL for compact display.
    ///
    /// Strips the scheme and any `www.` prefix, then truncates at the first
    /// path separator. Returns an empty string when the URL has no host part.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyfetch::domain::Story;
    ///
    /// let story = Story {
    ///     id: "1".to_string(),
    ///     title: "Rust 1.0".to_string(),
    ///     url: "https://www.rust-lang.org/news".to_string(),
    ///     author: "steve".to_string(),
    ///     num_comments: 42,
    ///     points: 100,
    /// };
    /// assert_eq!(story.host(), "rust-lang.org");
    /// ```
    #[must_use]
    pub fn host(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        rest.split(['/', '?']).next().unwrap_or("")
    }
}
