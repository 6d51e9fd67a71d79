//! ghcms web server
//!
//! A blog whose posts are GitHub issues. Issues labelled `Published` are
//! fetched on every page request, their front matter applied and their
//! markdown rendered into a single server-rendered page.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod content;
mod domain;
mod error;
mod handlers;
mod page;

#[cfg(test)]
mod test_utils;

use adapters::GitHubClientImpl;
use app::PostService;
use config::Config;
use content::MarkdownRenderer;
use error::GitHubError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService<GitHubClientImpl>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let github = Arc::new(GitHubClientImpl::new(&config)?);
        let post_service = Arc::new(PostService::new(
            github,
            config.published_labels.clone(),
            config.max_pages,
            MarkdownRenderer::new(config.allow_raw_html),
        ));

        Ok(Self {
            post_service,
            config,
        })
    }
}

/// Build the router: the blog page is the only route
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ghcms_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ghcms...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        repo = %config.repo,
        authenticated = config.github_token.is_some(),
        labels = ?config.published_labels,
        "Serving posts from GitHub"
    );
    if config.allow_raw_html {
        tracing::info!("Raw HTML in issue bodies is passed through; issue authors are trusted");
    }

    let port = config.port;
    let state = AppState::new(config)?;
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
