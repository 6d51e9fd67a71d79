//! HTTP handlers
//!
//! Axum request handlers for the blog page.

pub mod index;

pub use index::index;
