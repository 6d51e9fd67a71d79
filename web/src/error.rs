//! Error types for the ghcms web server
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub API client errors
//! - `ConfigError`: environment configuration errors
//! - `AppError`: handler layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream listing failed with an error-range status.
    #[error("{status} {status_text}{}", upstream_message(.message))]
    Api {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid pagination link: {0}")]
    InvalidLink(String),
}

fn upstream_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!("\n{}", m))
        .unwrap_or_default()
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("Repository must look like owner/name, got {0:?}")]
    InvalidRepo(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Render(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::GitHub(e) => {
                tracing::error!(error = %e, "Listing posts failed");
                StatusCode::BAD_GATEWAY
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = Html(format!(
            "<!DOCTYPE html>\n<html><head><title>{reason}</title></head>\
             <body><h1>{reason}</h1><p>Something went wrong. Please try again later.</p></body></html>\n"
        ));

        (status, body).into_response()
    }
}
