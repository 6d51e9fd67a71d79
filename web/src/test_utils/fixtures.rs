//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::time::Duration;

use crate::config::{Config, RepoId};
use crate::domain::ports::github::GitHubLabel;
use crate::domain::ports::GitHubIssue;

/// Create a label with the given name
pub fn test_label(name: &str) -> GitHubLabel {
    GitHubLabel {
        name: name.to_string(),
    }
}

/// Create an issue created 2024-03-01T12:00:00Z
pub fn test_issue(title: &str, body: &str, labels: &[&str]) -> GitHubIssue {
    GitHubIssue {
        title: title.to_string(),
        body: Some(body.to_string()),
        created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
        updated_at: "2024-03-02T08:30:00Z".parse().unwrap(),
        labels: labels.iter().map(|l| test_label(l)).collect(),
        html_url: "https://github.com/octo/blog/issues/1".to_string(),
        comments_url: "https://api.github.com/repos/octo/blog/issues/1/comments".to_string(),
        reactions: None,
    }
}

/// JSON for an issue as the GitHub API returns it
pub fn issue_json(title: &str, body: &str, labels: &[&str]) -> String {
    let labels: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(i, name)| serde_json::json!({ "id": i, "name": name, "color": "0e8a16" }))
        .collect();

    serde_json::json!({
        "number": 1,
        "state": "open",
        "title": title,
        "body": body,
        "created_at": "2024-03-01T12:00:00Z",
        "updated_at": "2024-03-02T08:30:00Z",
        "labels": labels,
        "html_url": "https://github.com/octo/blog/issues/1",
        "comments_url": "https://api.github.com/repos/octo/blog/issues/1/comments",
        "reactions": {
            "url": "https://api.github.com/repos/octo/blog/issues/1/reactions",
            "total_count": 1,
            "+1": 1,
            "-1": 0,
            "laugh": 0,
            "hooray": 0,
            "confused": 0,
            "heart": 0,
            "rocket": 0,
            "eyes": 0
        }
    })
    .to_string()
}

/// Config for the `octo/blog` repository served from `api_url`
pub fn test_config(api_url: &str) -> Config {
    Config {
        repo: RepoId {
            owner: "octo".to_string(),
            name: "blog".to_string(),
        },
        github_token: None,
        github_api_url: api_url.to_string(),
        per_page: 100,
        max_pages: 1000,
        request_timeout: Duration::from_secs(5),
        published_labels: vec!["Published".to_string()],
        site_title: "GitHub CMS".to_string(),
        site_heading: "Welcome to my blog".to_string(),
        allow_raw_html: true,
        port: 0,
    }
}
