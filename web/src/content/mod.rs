//! Content module
//!
//! Turns an issue body into post content: front matter, slugs, dates and
//! markdown rendering.

pub mod date;
pub mod front_matter;
pub mod markdown;
pub mod slug;

pub use date::post_date;
pub use front_matter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use slug::post_slug;
