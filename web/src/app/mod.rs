//! Application layer
//!
//! Contains use cases and service orchestration.
//! The post service pages through GitHub; the issue parser turns each
//! published issue into a post.

pub mod issue_parser;
pub mod post_service;

pub use post_service::PostService;
