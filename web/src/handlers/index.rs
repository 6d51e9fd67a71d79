//! Index handler
//!
//! The blog's only page: every request lists the posts from GitHub and
//! renders them.

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::page::render_index;
use crate::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.post_service.list_posts().await?;
    let page = render_index(&state.config.site_title, &state.config.site_heading, &posts)?;

    Ok(Html(page))
}
