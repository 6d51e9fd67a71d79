//! Mock implementations of port traits
//!
//! In-memory GitHub client serving scripted pages keyed by cursor.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{GitHubClient, GitHubIssue, IssuePage};
use crate::error::GitHubError;

type Cursor = Option<String>;

#[derive(Clone)]
enum ScriptedPage {
    Page(IssuePage),
    Failure(u16),
}

#[derive(Clone, Default)]
pub struct MockGitHubClient {
    pages: Arc<RwLock<HashMap<Cursor, ScriptedPage>>>,
    /// Cursors in the order they were requested
    fetched: Arc<RwLock<Vec<Cursor>>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `issues` for `cursor`, pointing at `next`
    pub fn with_page(
        self,
        cursor: Option<&str>,
        issues: Vec<GitHubIssue>,
        next: Option<&str>,
    ) -> Self {
        self.pages.write().unwrap().insert(
            cursor.map(String::from),
            ScriptedPage::Page(IssuePage {
                issues,
                next: next.map(String::from),
            }),
        );
        self
    }

    /// Answer `cursor` with an error-range status
    pub fn with_failure(self, cursor: Option<&str>, status: u16) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(cursor.map(String::from), ScriptedPage::Failure(status));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.read().unwrap().len()
    }

    pub fn fetched_cursors(&self) -> Vec<Cursor> {
        self.fetched.read().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn fetch_issue_page(&self, next: Option<&str>) -> Result<IssuePage, GitHubError> {
        let cursor = next.map(String::from);
        self.fetched.write().unwrap().push(cursor.clone());

        match self.pages.read().unwrap().get(&cursor).cloned() {
            Some(ScriptedPage::Page(page)) => Ok(page),
            Some(ScriptedPage::Failure(status)) => Err(GitHubError::Api {
                status,
                status_text: "Mock failure".to_string(),
                message: Some("Mock failure".to_string()),
            }),
            None => Err(GitHubError::Api {
                status: 404,
                status_text: "Not Found".to_string(),
                message: Some(format!("No page scripted for {:?}", cursor)),
            }),
        }
    }
}
