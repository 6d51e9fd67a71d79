//! Issue parser
//!
//! Turns one published GitHub issue into a post. Never fails: bad front
//! matter or dates fall back to the issue's own fields.

use crate::content::{post_date, post_slug, FrontMatter, MarkdownRenderer};
use crate::domain::entities::{GhMetadata, Post};
use crate::domain::ports::GitHubIssue;

pub fn parse_issue(issue: GitHubIssue, markdown: &MarkdownRenderer) -> Post {
    let front_matter = FrontMatter::parse(issue.body.as_deref().unwrap_or_default());
    if front_matter.is_empty() {
        tracing::debug!(issue = %issue.html_url, "Issue has no front matter");
    }

    let title = front_matter
        .get("title")
        .unwrap_or_else(|| issue.title.clone());
    let slug = post_slug(front_matter.get("slug").as_deref(), &title);
    let date = post_date(front_matter.get("date").as_deref(), &issue.created_at);
    let html = markdown.render(front_matter.content());

    Post {
        content: front_matter.into_content(),
        html,
        title,
        slug,
        date,
        gh_metadata: GhMetadata {
            issue_url: issue.html_url,
            comments_url: issue.comments_url,
            title: issue.title,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            reactions: issue.reactions,
        },
    }
}
