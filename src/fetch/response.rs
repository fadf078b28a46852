//! Wire-format types for the search API response.
//!
//! This module defines the raw response records as the search service delivers
//! them, separate from the domain [`Story`] model. Field names on the wire use
//! the service's conventions (`objectID`, `num_comments`); renaming and defaults
//! are handled here at the ingestion boundary so the rest of the crate only ever
//! sees well-formed stories.

use crate::domain::Story;
use serde::Deserialize;

/// Top-level search response payload.
///
/// Only the `hits` field is consumed; the service sends paging and timing
/// metadata alongside it, which is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Story records in relevance order as ranked by the service.
    #[serde(default)]
    pub hits: Vec<StoryHit>,
}

/// One raw hit from the search response.
///
/// Hits for comments and polls can lack a title or URL, which the service
/// encodes as `null`. Those fields default to empty strings during ingestion
/// rather than failing the whole payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryHit {
    /// Server-assigned object identifier, the identity key.
    #[serde(rename = "objectID")]
    pub object_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub num_comments: Option<u64>,

    #[serde(default)]
    pub points: Option<i64>,
}

impl From<StoryHit> for Story {
    fn from(hit: StoryHit) -> Self {
        Self {
            id: hit.object_id,
            title: hit.title.unwrap_or_default(),
            url: hit.url.unwrap_or_default(),
            author: hit.author.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or_default(),
            points: hit.points.unwrap_or_default(),
        }
    }
}

impl SearchResponse {
    /// Converts the raw hits into domain stories, preserving response order.
    #[must_use]
    pub fn into_stories(self) -> Vec<Story> {
        self.hits.into_iter().map(Story::from).collect()
    }
}
