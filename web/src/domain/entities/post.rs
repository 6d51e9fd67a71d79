//! Post domain entity
//!
//! Issues live in GitHub (source of truth). A post is the page's view of a
//! published issue: front matter applied, markdown rendered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post derived from one published issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Markdown body with the front matter stripped
    pub content: String,
    pub html: String,
    pub title: String,
    /// Rendering key only; two posts may share a slug
    pub slug: String,
    /// UTC ISO-8601 with millisecond precision
    pub date: String,
    pub gh_metadata: GhMetadata,
}

/// Issue details carried alongside a post, as GitHub reported them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GhMetadata {
    pub issue_url: String,
    pub comments_url: String,
    pub title: String,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
    pub reactions: Option<Reactions>,
}

/// Reaction summary of an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(rename = "+1", default)]
    pub plus_one: u64,
    #[serde(rename = "-1", default)]
    pub minus_one: u64,
    #[serde(default)]
    pub laugh: u64,
    #[serde(default)]
    pub hooray: u64,
    #[serde(default)]
    pub confused: u64,
    #[serde(default)]
    pub heart: u64,
    #[serde(default)]
    pub rocket: u64,
    #[serde(default)]
    pub eyes: u64,
}
