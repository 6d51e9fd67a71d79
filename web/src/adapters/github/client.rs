//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, Url};
use serde::Deserialize;
use urlencoding::encode;

use super::link_header::next_link;
use crate::config::{Config, RepoId};
use crate::domain::ports::{GitHubClient, GitHubIssue, IssuePage};
use crate::error::GitHubError;

const USER_AGENT: &str = concat!("ghcms-web/", env!("CARGO_PKG_VERSION"));

/// Implementation of the GitHub issue client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
    repo: RepoId,
    token: Option<String>,
    per_page: u32,
}

/// Error body returned by the GitHub API
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: Option<String>,
}

impl GitHubClientImpl {
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
            repo: config.repo.clone(),
            token: config.github_token.clone(),
            per_page: config.per_page,
        })
    }

    fn first_page_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues?state=all&per_page={}",
            self.base_url,
            encode(&self.repo.owner),
            encode(&self.repo.name),
            self.per_page
        )
    }

    /// Resolve a `next` link; relative links are taken against the API base
    fn resolve_link(&self, link: &str) -> Result<Url, GitHubError> {
        let base = Url::parse(&format!("{}/", self.base_url))
            .map_err(|e| GitHubError::InvalidLink(format!("{}: {}", self.base_url, e)))?;
        base.join(link)
            .map_err(|e| GitHubError::InvalidLink(format!("{}: {}", link, e)))
    }

    async fn handle_page(&self, response: reqwest::Response) -> Result<IssuePage, GitHubError> {
        let status = response.status();

        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GitHubErrorResponse>(&body)
                .ok()
                .and_then(|r| r.message);
            return Err(GitHubError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message,
            });
        }

        let next = match response.headers().get(LINK) {
            Some(value) => {
                let value = value
                    .to_str()
                    .map_err(|e| GitHubError::InvalidLink(e.to_string()))?;
                next_link(value)
            }
            None => None,
        };

        let issues: Vec<GitHubIssue> = response
            .json()
            .await
            .map_err(|e| GitHubError::Deserialization(e.to_string()))?;

        Ok(IssuePage { issues, next })
    }
}

#[async_trait]
impl GitHubClient for GitHubClientImpl {
    async fn fetch_issue_page(&self, next: Option<&str>) -> Result<IssuePage, GitHubError> {
        let url = match next {
            Some(link) => self.resolve_link(link)?.to_string(),
            None => self.first_page_url(),
        };
        tracing::debug!(url = %url, "Fetching issues page");

        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;

        self.handle_page(resp).await
    }
}
