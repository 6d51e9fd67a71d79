//! GitHub adapter
//!
//! Implementation of the GitHub issue client and `Link` header pagination.

pub mod client;
pub mod link_header;

pub use client::GitHubClientImpl;
