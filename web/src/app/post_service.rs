//! Post service
//!
//! Lists the blog's posts: pages through the repository's issues, keeps the
//! published ones and parses each into a post. Nothing is cached; every call
//! reads GitHub again.

use std::collections::HashSet;
use std::sync::Arc;

use crate::app::issue_parser::parse_issue;
use crate::content::MarkdownRenderer;
use crate::domain::entities::Post;
use crate::domain::ports::GitHubClient;
use crate::error::GitHubError;

/// Service for listing published posts
pub struct PostService<GC>
where
    GC: GitHubClient,
{
    github: Arc<GC>,
    published_labels: Vec<String>,
    max_pages: usize,
    markdown: MarkdownRenderer,
}

impl<GC> PostService<GC>
where
    GC: GitHubClient,
{
    pub fn new(
        github: Arc<GC>,
        published_labels: Vec<String>,
        max_pages: usize,
        markdown: MarkdownRenderer,
    ) -> Self {
        Self {
            github,
            published_labels,
            max_pages,
            markdown,
        }
    }

    /// All published posts, in the order GitHub returns the issues.
    ///
    /// Pages are fetched one after another, following `next` links until
    /// there are none or `max_pages` pages have been read. Any failed page
    /// fails the whole listing.
    pub async fn list_posts(&self) -> Result<Vec<Post>, GitHubError> {
        let mut posts = Vec::new();
        let mut slugs = HashSet::new();
        let mut next: Option<String> = None;
        let mut pages = 0;

        loop {
            let page = self.github.fetch_issue_page(next.as_deref()).await?;
            pages += 1;
            tracing::debug!(page = pages, issues = page.issues.len(), "Fetched issues page");

            for issue in page.issues {
                if !issue.has_any_label(&self.published_labels) {
                    continue;
                }
                let post = parse_issue(issue, &self.markdown);
                // Slugs are only a rendering key; duplicates are kept.
                if !slugs.insert(post.slug.clone()) {
                    tracing::debug!(slug = %post.slug, "Duplicate post slug");
                }
                posts.push(post);
            }

            next = page.next;
            if next.is_none() {
                break;
            }
            if pages >= self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    "Stopped listing issues at the page limit"
                );
                break;
            }
        }

        tracing::info!(pages, posts = posts.len(), "Listed posts");
        Ok(posts)
    }
}
