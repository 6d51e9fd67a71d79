//! Domain entities
//!
//! Posts are built fresh from GitHub issues on every request.

pub mod post;

pub use post::{GhMetadata, Post, Reactions};
