use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository the blog posts are read from (`owner/name`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepo(s.to_string());
        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub repo: RepoId,
    /// Optional token; requests are unauthenticated (and rate-limited) without it
    pub github_token: Option<String>,
    pub github_api_url: String,
    /// Page size of the first listing request
    pub per_page: u32,
    /// Upper bound on the number of pages fetched per listing
    pub max_pages: usize,
    pub request_timeout: Duration,
    /// Issues carrying any of these labels are published
    pub published_labels: Vec<String>,
    pub site_title: String,
    pub site_heading: String,
    /// Pass raw HTML in issue bodies through to the page. Issue authors are
    /// trusted to be repository maintainers when this is on.
    pub allow_raw_html: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo: RepoId = lookup("GH_USER_REPO")
            .or_else(|| lookup("NEXT_PUBLIC_GH_USER_REPO"))
            .ok_or(ConfigError::Missing("GH_USER_REPO"))?
            .parse()?;

        let max_pages: usize = parse_or(&lookup, "GH_MAX_PAGES", 1000)?;
        if max_pages == 0 {
            return Err(ConfigError::Invalid {
                var: "GH_MAX_PAGES",
                value: "0".to_string(),
            });
        }

        let published_labels = lookup("PUBLISHED_LABELS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|labels| !labels.is_empty())
            .unwrap_or_else(|| vec!["Published".to_string()]);

        Ok(Self {
            repo,
            github_token: lookup("GH_TOKEN").filter(|t| !t.trim().is_empty()),
            github_api_url: lookup("GH_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            per_page: parse_or(&lookup, "GH_PER_PAGE", 100)?,
            max_pages,
            request_timeout: Duration::from_secs(parse_or(&lookup, "GH_TIMEOUT_SECS", 30)?),
            published_labels,
            site_title: lookup("SITE_TITLE").unwrap_or_else(|| "GitHub CMS".to_string()),
            site_heading: lookup("SITE_HEADING")
                .unwrap_or_else(|| "Welcome to my blog".to_string()),
            allow_raw_html: parse_or(&lookup, "ALLOW_RAW_HTML", true)?,
            port: parse_or(&lookup, "PORT", 8080)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}
