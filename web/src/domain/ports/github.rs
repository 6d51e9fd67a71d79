//! GitHub client port trait
//!
//! Defines the interface for reading issues from the GitHub REST API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::Reactions;
use crate::error::GitHubError;

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// GitHub issue representation (only the fields the blog reads)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubIssue {
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub labels: Vec<GitHubLabel>,
    pub html_url: String,
    pub comments_url: String,
    #[serde(default)]
    pub reactions: Option<Reactions>,
}

impl GitHubIssue {
    /// True if any label on the issue is in `labels`
    pub fn has_any_label(&self, labels: &[String]) -> bool {
        self.labels
            .iter()
            .any(|label| labels.iter().any(|wanted| *wanted == label.name))
    }
}

/// GitHub label representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubLabel {
    pub name: String,
}

/// One page of the issue listing
#[derive(Debug, Clone, Default)]
pub struct IssuePage {
    pub issues: Vec<GitHubIssue>,
    /// URL of the following page, from the `Link` header
    pub next: Option<String>,
}

/// Port for reading repository issues page by page
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch one page of issues. `None` requests the first page; otherwise
    /// `next` is a URL previously returned in [`IssuePage::next`].
    async fn fetch_issue_page(&self, next: Option<&str>) -> Result<IssuePage, GitHubError>;
}
